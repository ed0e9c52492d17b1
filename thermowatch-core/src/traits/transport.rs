//! Outbound message transport

/// Errors reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Outbox could not be opened (phone disconnected, app closed)
    Unavailable,
}

/// Fire-and-forget outbox towards the phone
///
/// Mirrors the host messaging API: a message is begun, filled, then sent.
/// Acknowledgements arrive later as ordinary inbound messages.
pub trait Outbox {
    /// Open the outbox for a new message
    fn begin(&mut self) -> Result<(), TransportError>;

    /// Transmit an encoded dictionary
    ///
    /// Only called after a successful `begin`.
    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError>;
}

impl<T: Outbox + ?Sized> Outbox for &mut T {
    fn begin(&mut self) -> Result<(), TransportError> {
        (**self).begin()
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        (**self).send(payload)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Outbox that records every sent payload
    #[derive(Debug, Default)]
    pub struct MockOutbox {
        pub available: bool,
        pub begins: usize,
        pub sent: std::vec::Vec<std::vec::Vec<u8>>,
    }

    impl MockOutbox {
        pub fn connected() -> Self {
            Self {
                available: true,
                ..Default::default()
            }
        }

        pub fn disconnected() -> Self {
            Self::default()
        }
    }

    impl Outbox for MockOutbox {
        fn begin(&mut self) -> Result<(), TransportError> {
            self.begins += 1;
            if self.available {
                Ok(())
            } else {
                Err(TransportError::Unavailable)
            }
        }

        fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
            self.sent.push(payload.to_vec());
            Ok(())
        }
    }
}
