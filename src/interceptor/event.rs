//! Events produced by an outbound call.

/// What a continuation hands back to the interceptor.
///
/// Only [`HttpEvent::Response`] is a completed response and therefore
/// cacheable.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpEvent<T> {
    /// Request went out; nothing received yet
    Sent,
    /// Partial transfer progress
    Progress { loaded: u64, total: Option<u64> },
    /// Completed response
    Response(T),
}

impl<T> HttpEvent<T> {
    /// Returns the completed response, if this is one.
    pub fn into_response(self) -> Option<T> {
        match self {
            HttpEvent::Response(response) => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_response() {
        assert_eq!(HttpEvent::Response(3).into_response(), Some(3));
        assert_eq!(HttpEvent::<u8>::Sent.into_response(), None);
        assert_eq!(
            HttpEvent::<u8>::Progress { loaded: 1, total: None }.into_response(),
            None
        );
    }
}
