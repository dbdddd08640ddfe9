use std::sync::Arc;

use log::debug;

use crate::{Error, Machine, Result};

/// Determines the login name of the current user and the host name of this machine.
pub fn probe_machine() -> Result<Machine> {
    let user = whoami::fallible::username().map_err(|e| Error::MachineLookup(Arc::new(e)))?;
    let host = whoami::fallible::hostname().map_err(|e| Error::MachineLookup(Arc::new(e)))?;

    let machine = Machine::new(&user, &host);
    debug!("Build machine is {}", machine);

    Ok(machine)
}
