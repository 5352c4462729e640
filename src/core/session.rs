//! External ssh invocation

use std::process::Command;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::store::ConnectionRecord;

/// The command line warp hands to the shell, shown to the user verbatim.
pub fn ssh_command(record: &ConnectionRecord) -> String {
    format!("ssh {}@{}", record.username, record.ip_address)
}

/// Launch the SSH session with inherited terminal streams, blocking until it
/// ends. The session's exit status belongs to the terminal; warp does not
/// interpret it.
pub fn launch(record: &ConnectionRecord) -> Result<()> {
    let target = format!("{}@{}", record.username, record.ip_address);
    println!(
        " > Executing {}",
        style(format!("'ssh {target}'")).cyan()
    );
    Command::new("ssh").arg(&target).status().into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_uses_username_and_ip() {
        let record = ConnectionRecord {
            environment: "prod".to_string(),
            hostname: "host1".to_string(),
            ip_address: "1.2.3.4".to_string(),
            username: "bob".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(ssh_command(&record), "ssh bob@1.2.3.4");
    }
}
