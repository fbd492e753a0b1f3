use std::process::ExitCode;

/// What a run of the CLI produced.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// Text for stdout: a wire string, a response body or the help.
    Printed(String),

    /// An error message for stderr.
    Failed(String),
}
impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Printed(_))
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Write the outcome to its stream and return the matching exit code.
    pub fn emit(self) -> ExitCode {
        let exit_code = self.exit_code();
        match self {
            Self::Printed(text) => println!("{text}"),
            Self::Failed(message) => eprintln!("{message}"),
        }
        exit_code
    }
}
