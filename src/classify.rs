/// Outcome of a response status, decided by its hundreds digit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Classification {
    /// 2xx: the body is the result.
    Success,
    /// 4xx: definitive, never retried.
    ClientError,
    /// Everything else, including 1xx and 3xx: retried with backoff.
    Transient,
}

impl Classification {
    pub fn of(status: u16) -> Self {
        match status / 100 {
            2 => Self::Success,
            4 => Self::ClientError,
            _ => Self::Transient,
        }
    }
}
