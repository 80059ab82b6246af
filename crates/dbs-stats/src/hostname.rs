/// Name of the machine serving the report.
///
/// Resolved on every report so that, behind a load balancer, the report
/// tail names the backend that actually answered.
pub trait Hostname: Send + Sync {
    fn hostname(&self) -> std::io::Result<String>;
}

/// The kernel's network hostname.
#[derive(Debug, Clone, Copy, Default)]
pub struct System;

impl Hostname for System {
    fn hostname(&self) -> std::io::Result<String> {
        nix::unistd::gethostname()
            .map(|name| name.to_string_lossy().into_owned())
            .map_err(std::io::Error::from)
    }
}

impl Hostname for &'static str {
    fn hostname(&self) -> std::io::Result<String> {
        Ok(self.to_string())
    }
}

impl Hostname for String {
    fn hostname(&self) -> std::io::Result<String> {
        Ok(self.clone())
    }
}
