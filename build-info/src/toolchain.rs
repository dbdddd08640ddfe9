use log::info;

use crate::{command::CommandRunner, Error, Result};

/// The cross-compiler used for the firmware.
pub const DEFAULT_COMPILER: &str = "arm-none-eabi-gcc";

/// Asks the compiler for its version number.
///
/// # Arguments
/// * `runner` - Used to run the compiler.
/// * `compiler` - The name or path of the compiler executable.
pub fn compiler_version<R: CommandRunner + ?Sized>(runner: &R, compiler: &str) -> Result<String> {
    let version = runner.run(compiler, &["-dumpversion"])?;
    if version.is_empty() {
        return Err(Error::EmptyToolOutput(compiler.to_owned()));
    }

    info!("Compiler version: {}", version);
    Ok(version)
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use super::*;

    struct FakeCompiler {
        output: &'static str,
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for FakeCompiler {
        fn run(&self, program: &str, args: &[&str]) -> Result<String> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            Ok(self.output.trim().to_owned())
        }
    }

    #[test]
    fn test_compiler_version() {
        let runner = FakeCompiler {
            output: "10.2.0\n",
            calls: RefCell::new(Vec::new()),
        };

        assert_eq!(compiler_version(&runner, DEFAULT_COMPILER).unwrap(), "10.2.0");
        assert_eq!(*runner.calls.borrow(), vec!["arm-none-eabi-gcc -dumpversion"]);
    }

    #[test]
    fn test_empty_compiler_version() {
        let runner = FakeCompiler {
            output: "\n",
            calls: RefCell::new(Vec::new()),
        };

        let err = compiler_version(&runner, "gcc").unwrap_err();
        assert!(matches!(err, Error::EmptyToolOutput(ref p) if p == "gcc"));
    }
}
