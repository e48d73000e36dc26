//! The inject-then-sleep loop.
//!
//! Every iteration builds the same [`PoolInfo`] from the [`Config`], hands it to an
//! [`EntropySink`], and sleeps for `config.interval`. The loop has no exit of its own: it runs
//! until a submission fails or the process is killed.

use core::convert::Infallible;

use crate::Error;
use crate::config::Config;
use crate::pool_info::PoolInfo;
use crate::pool_status::PoolStatus;
use crate::random_device::RandomDevice;

/// Something that accepts `RNDADDENTROPY` records.
///
/// [`RandomDevice`] is the only production implementation. Tests substitute a recorder.
pub trait EntropySink {
    /// Submits one record.
    ///
    /// # Errors
    /// Whatever the sink fails with. The injector treats every error as fatal.
    fn add_entropy(&mut self, info: &PoolInfo) -> Result<(), Error>;

    /// Human-readable name for log lines.
    fn describe(&self) -> String {
        String::from("entropy sink")
    }
}

impl<S: EntropySink + ?Sized> EntropySink for &mut S {
    fn add_entropy(&mut self, info: &PoolInfo) -> Result<(), Error> {
        (**self).add_entropy(info)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub struct Injector<S> {
    sink: S,
    config: Config,
    iterations: u64,
}

impl Injector<RandomDevice> {
    /// An injector writing to `config.device`.
    #[must_use]
    pub fn for_device(config: Config) -> Self {
        Self::new(RandomDevice::at(config.device.clone()), config)
    }
}

impl<S: EntropySink> Injector<S> {
    pub const fn new(sink: S, config: Config) -> Self {
        Self { sink, config, iterations: 0 }
    }

    /// Number of successful submissions so far.
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Submits the configured record once, without sleeping.
    ///
    /// # Errors
    /// Returns the sink's error unchanged. The iteration counter is not bumped on failure.
    pub fn inject_once(&mut self) -> Result<(), Error> {
        let info = self.config.pool_info();
        self.sink.add_entropy(&info)?;
        self.iterations += 1;

        log::debug!(
            "submission {}: {} bytes claiming {} bits to {}",
            self.iterations,
            info.buf_size,
            info.entropy_count,
            self.sink.describe()
        );
        Ok(())
    }

    /// Submits forever, sleeping `config.interval` after each record.
    ///
    /// The first submission happens before any sleep, so an unprivileged caller gets its error
    /// straight away.
    ///
    /// # Errors
    /// Returns the first submission error. This is the only way the function returns.
    pub fn run(mut self) -> Result<Infallible, Error> {
        log::info!(
            "injecting {} constant bytes claiming {} bits into {} every {:?}",
            self.config.payload.len(),
            self.config.entropy_count,
            self.sink.describe(),
            self.config.interval
        );

        loop {
            if let Err(err) = self.inject_once() {
                log::error!("stopping after {} submissions: {err}", self.iterations);
                return Err(err);
            }

            if self.config.report_every > 0 && self.iterations % self.config.report_every == 0 {
                self.report_status();
            }

            std::thread::sleep(self.config.interval);
        }
    }

    fn report_status(&self) {
        match PoolStatus::read_from(&self.config.proc_dir) {
            | Ok(status) => {
                log::info!("{} submissions, pool entropy {status}", self.iterations);
            }
            | Err(err) => log::warn!("pool status unavailable: {err}"),
        }
    }
}
