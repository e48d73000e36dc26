//! `add-pseudo-entropy`: feeds a constant byte string into `/dev/random` every millisecond.
//!
//! FOR TESTING ONLY. This does not provide entropy to `/dev/random`, just bytes. The kernel is told
//! they carry entropy and will over-count its pool.
//!
//! Takes no arguments. Log verbosity follows `RUST_LOG` (default `info`). Runs until killed or
//! until the kernel refuses a submission; needs root.

use anyhow::{Context, Result};

use kiss_pseudo_entropy::{Config, Injector};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::warn!("FOR TESTING ONLY: this feeds constant bytes to the kernel and provides NO entropy");

    let config = Config::default();
    let device = config.device.display().to_string();

    let Err(err) = Injector::for_device(config).run();

    if err.is_permission_denied() {
        log::error!("RNDADDENTROPY needs CAP_SYS_ADMIN. Are you root?");
    }
    Err(err).with_context(|| format!("adding pseudo entropy to {device}"))
}
