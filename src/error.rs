use core::num::TryFromIntError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid slice format `{input}`: {reason}")]
    Format { input: String, reason: &'static str },

    #[error("too many slices: {n_slices} given for array of dimension {n_dims}")]
    TooManySlices { n_slices: usize, n_dims: usize },

    #[error("index {index} is out of range for axis of length {len}")]
    OutOfRange { index: isize, len: usize },

    #[error(transparent)]
    TryFromInt(#[from] TryFromIntError),
}

impl Error {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        Self::Format {
            input: input.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::format("3", "expected `start:stop[:step]`").to_string(),
            "invalid slice format `3`: expected `start:stop[:step]`"
        );
        assert_eq!(
            Error::TooManySlices {
                n_slices: 3,
                n_dims: 2
            }
            .to_string(),
            "too many slices: 3 given for array of dimension 2"
        );
        assert_eq!(
            Error::OutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 is out of range for axis of length 3"
        );
    }

    #[test]
    fn convert_from_try_from_int_error() {
        let e = u8::try_from(300_usize).unwrap_err();
        let err = Error::from(e);

        assert!(matches!(err, Error::TryFromInt(_)));
    }
}
