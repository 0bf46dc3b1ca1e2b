use crossbeam_channel::{bounded, select, Receiver};
use std::thread;

use crate::{Optional, OptionalResult};

/// Receivers produced by [`Optional::get`].
///
/// Exactly one of `some` and `none` delivers a message. Both are closed once
/// the delivery task has finished, so wait on both at once:
///
/// ```rust
/// use crossbeam_channel::select;
/// use optionals::Optional;
///
/// let signals = Optional::some(7).get();
/// select! {
///     recv(signals.some) -> v => assert_eq!(v, Ok(7)),
///     recv(signals.none) -> _ => unreachable!(),
/// }
/// ```
#[derive(Debug)]
pub struct Signals<T> {
    pub some: Receiver<T>,
    pub none: Receiver<()>,
}

impl<T> Signals<T> {
    /// Blocks until one channel delivers and returns the state it carried.
    pub fn wait(self) -> Optional<T> {
        select! {
            recv(self.some) -> value => value.map_or(Optional::Absent, Optional::Present),
            recv(self.none) -> _ => Optional::Absent,
        }
    }
}

/// Receivers produced by [`OptionalResult::get`]. Exactly one of the three
/// delivers a message; all three are closed afterwards.
#[derive(Debug)]
pub struct ResultSignals<T, E> {
    pub some: Receiver<T>,
    pub none: Receiver<()>,
    pub err: Receiver<E>,
}

impl<T, E> ResultSignals<T, E> {
    /// Blocks until one channel delivers and returns the state it carried.
    pub fn wait(self) -> OptionalResult<T, E> {
        // A disconnect without a message means the task died before sending.
        select! {
            recv(self.some) -> value => {
                value.map_or(OptionalResult::Absent, OptionalResult::Present)
            }
            recv(self.none) -> _ => OptionalResult::Absent,
            recv(self.err) -> err => err.map_or(OptionalResult::Absent, OptionalResult::Failed),
        }
    }
}

pub(crate) fn deliver<T>(state: Optional<T>) -> Signals<T>
where
    T: Send + 'static,
{
    let (some_tx, some) = bounded(0);
    let (none_tx, none) = bounded(0);

    thread::spawn(move || {
        let delivered = match state {
            Optional::Present(value) => some_tx.send(value).is_ok(),
            Optional::Absent => none_tx.send(()).is_ok(),
        };
        if !delivered {
            log::trace!("optional receivers dropped before delivery");
        }
        // some_tx and none_tx drop here, closing both channels.
    });

    Signals { some, none }
}

pub(crate) fn deliver_result<T, E>(state: OptionalResult<T, E>) -> ResultSignals<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let (some_tx, some) = bounded(0);
    let (none_tx, none) = bounded(0);
    let (err_tx, err) = bounded(0);

    thread::spawn(move || {
        let delivered = match state {
            OptionalResult::Present(value) => some_tx.send(value).is_ok(),
            OptionalResult::Failed(e) => err_tx.send(e).is_ok(),
            OptionalResult::Absent => none_tx.send(()).is_ok(),
        };
        if !delivered {
            log::trace!("optional result receivers dropped before delivery");
        }
    });

    ResultSignals { some, none, err }
}
