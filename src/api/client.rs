use lazy_static::lazy_static;
use std::time::Duration;

lazy_static! {
    /// Shared blocking HTTP agent for all API clients. One attempt per call;
    /// the global timeout is the only timeout layer.
    pub static ref UREQ_AGENT: ureq::Agent = {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(120)))
            .build();
        config.into()
    };
}
