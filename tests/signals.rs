use crossbeam_channel::select;
use optionals::{Failure, Optional, OptionalResult};
use std::{sync::Arc, thread};

#[test]
fn optional_get_delivers_value() {
    let opt = Optional::some(String::from("blah blah"));
    let signals = opt.get();

    select! {
        recv(signals.some) -> v => assert_eq!(v.as_deref(), Ok("blah blah")),
        recv(signals.none) -> _ => panic!("was not expecting none"),
    }
}

#[test]
fn optional_get_delivers_none() {
    let signals = Optional::<String>::none().get();

    select! {
        recv(signals.some) -> _ => panic!("was not expecting some"),
        recv(signals.none) -> v => assert_eq!(v, Ok(())),
    }
}

#[test]
fn optional_channels_close_after_delivery() {
    let signals = Optional::some(1u8).get();

    assert_eq!(signals.some.recv(), Ok(1));
    assert!(signals.none.recv().is_err());
    assert!(signals.some.recv().is_err());
}

#[test]
fn optional_get_is_recallable() {
    let opt = Optional::some(7u64);
    let first = opt.get();
    let second = opt.get();

    assert_eq!(second.wait(), Optional::some(7));
    assert_eq!(first.wait(), Optional::some(7));
    assert_eq!(opt.get().wait(), opt);
}

#[test]
fn optional_get_with_dropped_receivers() {
    let opt = Optional::some(3i32);
    drop(opt.get());
    assert_eq!(opt.get().wait(), Optional::some(3));
}

#[test]
fn optional_get_from_many_threads() {
    let opt = Arc::new(Optional::some(String::from("shared")));
    let handles = (0..8)
        .map(|_| {
            let opt = opt.clone();
            thread::spawn(move || opt.get().wait())
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), *opt);
    }
}

#[test]
fn result_get_delivers_value() {
    let signals = OptionalResult::<_>::some("blah blah").get();

    select! {
        recv(signals.some) -> v => assert_eq!(v, Ok("blah blah")),
        recv(signals.none) -> _ => panic!("was not expecting none"),
        recv(signals.err) -> _ => panic!("was not expecting err"),
    }
}

#[test]
fn result_get_delivers_none() {
    let signals = OptionalResult::<&str>::none().get();

    select! {
        recv(signals.some) -> _ => panic!("was not expecting some"),
        recv(signals.none) -> v => assert_eq!(v, Ok(())),
        recv(signals.err) -> _ => panic!("was not expecting err"),
    }
}

#[test]
fn result_get_delivers_exact_error() {
    let my_err = Failure::new("bad stuff happened");
    let res = OptionalResult::<String>::failed(my_err.clone());
    assert!(!res.is_present());

    let signals = res.get();
    select! {
        recv(signals.some) -> _ => panic!("was not expecting some"),
        recv(signals.none) -> _ => panic!("was not expecting none"),
        recv(signals.err) -> err => {
            let err = err.unwrap();
            assert!(Failure::ptr_eq(&err, &my_err));
            assert_eq!(err.to_string(), "bad stuff happened");
        }
    }
}

#[test]
fn result_channels_close_after_delivery() {
    let signals = OptionalResult::<u8>::failed(Failure::new("x")).get();

    assert!(signals.err.recv().is_ok());
    assert!(signals.some.recv().is_err());
    assert!(signals.none.recv().is_err());
    assert!(signals.err.recv().is_err());
}

#[test]
fn result_wait_returns_state() {
    let failure = Failure::new("loki is a secret");

    assert_eq!(OptionalResult::<_>::some(1).get().wait(), OptionalResult::some(1));
    assert_eq!(OptionalResult::<i32>::none().get().wait(), OptionalResult::none());
    assert_eq!(
        OptionalResult::<i32>::failed(failure.clone()).get().wait(),
        OptionalResult::failed(failure)
    );
}
