use embedded_hal_async::spi::{self, Operation};
use mockall::mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiError;

impl spi::Error for SpiError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

mock! {
    #[derive(Debug)]
    pub SpiDevice<Word: Copy + 'static = u8> { }

    impl<Word: Copy + 'static> spi::SpiDevice<Word> for SpiDevice<Word> {
        async fn transaction<'a>(
            &mut self,
            operations: &mut [spi::Operation<'a, Word>],
        ) -> Result<(), SpiError>;
    }

    impl<Word: Copy + 'static> spi::ErrorType for SpiDevice<Word> {
        type Error = SpiError;
    }
}

impl MockSpiDevice<u8> {
    /// Expect a single transaction whose operations match `expected`.
    ///
    /// Write operations are compared byte for byte; read and transfer
    /// operations are matched on length only and filled from `expected`.
    pub fn expect_transaction_operations(&mut self, expected: &'static [Operation<'static, u8>]) {
        self.expect_transaction()
            .withf(move |transaction| {
                if transaction.len() != expected.len() {
                    return false;
                }
                transaction
                    .iter()
                    .zip(expected)
                    .all(|(actual, expected)| Self::is_match(actual, expected))
            })
            .returning(move |transaction| {
                for (dest, src) in transaction.iter_mut().zip(expected) {
                    Self::assign(dest, src);
                }
                Ok(())
            })
            .times(1);
    }

    fn is_match(x: &Operation<'_, u8>, y: &Operation<'_, u8>) -> bool {
        match (x, y) {
            (Operation::Read(x), Operation::Read(y)) => x.len() == y.len(),
            (Operation::Write(x), Operation::Write(y)) => x == y,
            (Operation::Transfer(_, x), Operation::Transfer(_, y)) => x == y,
            _ => false,
        }
    }

    fn assign(dest: &mut Operation<'_, u8>, src: &Operation<'_, u8>) {
        match (dest, src) {
            (Operation::Read(dest), Operation::Read(src)) => dest.copy_from_slice(src),
            (Operation::Transfer(dest, _), Operation::Transfer(src, _)) => {
                dest.copy_from_slice(src)
            }
            _ => {}
        }
    }
}
