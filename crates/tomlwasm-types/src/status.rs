/// Result code returned by the conversion export.
///
/// The host only sees the integer: `0` is success, anything else means the
/// output buffer holds a diagnostic payload instead of converted data.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success = 0,
    Failure = 1,
}

impl Status {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Status::Success
        } else {
            Status::Failure
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}
