mod lookup {
    use std::borrow::Cow;

    #[prctx_derive::prctx_error]
    pub enum LookupError {
        #[error("Missing binding{}: {message}", format_context(.context))]
        Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

        #[error("Internal error{}: {message}", format_context(.context))]
        Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    }
}

mod wrap {
    use std::borrow::Cow;

    #[prctx_derive::prctx_error]
    pub enum WrapError {
        #[error("IO error{}: {source}", format_context(.context))]
        Io { source: std::io::Error, context: Option<Cow<'static, str>> },
    }

    fn io(reason: &str) -> std::io::Result<()> {
        Err(std::io::Error::other(reason.to_owned()))
    }

    pub fn read() -> Result<(), WrapError> {
        io("disk").context("reading")?;
        Ok(())
    }

    pub fn forward() -> Result<(), WrapError> {
        io("pipe")?;
        Ok(())
    }
}

use lookup::{LookupError, LookupErrorExt};

fn missing() -> Result<(), LookupError> {
    Err(LookupError::Missing { message: "selected".into(), context: None })
}

fn main() {
    let err = missing().context("list view").unwrap_err();
    assert_eq!(err.to_string(), "Missing binding (list view): selected");

    let internal: LookupError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let wrapped = wrap::read().unwrap_err();
    assert_eq!(wrapped.to_string(), "IO error (reading): disk");

    let forwarded = wrap::forward().unwrap_err();
    assert_eq!(forwarded.to_string(), "IO error: pipe");
}
