//! Looks up Asgardians by id and reports the outcome, first through an
//! `(Optional, error)` pair and then through an `OptionalResult`.
//!
//! Run with `RUST_LOG=info cargo run --example asgardians`.

use crossbeam_channel::select;
use optionals::{Failure, Optional, OptionalResult};

#[derive(Clone, Debug)]
struct Asgardian {
    id: u32,
    name: String,
}

struct Pantheon {
    members: Vec<Asgardian>,
}

impl Pantheon {
    fn new() -> Self {
        let members = [(1, "Odin"), (2, "Thor"), (3, "Hathor")]
            .into_iter()
            .map(|(id, name)| Asgardian {
                id,
                name: name.into(),
            })
            .collect();
        Self { members }
    }

    fn find(&self, id: u32) -> Option<&Asgardian> {
        self.members.iter().find(|member| member.id == id)
    }
}

// Id 4 stands in for a lookup that fails.
const SECRET_ID: u32 = 4;

fn fetch_optional(pantheon: &Pantheon, id: u32) -> (Optional<Asgardian>, Option<Failure>) {
    if id == SECRET_ID {
        return (Optional::none(), Some(Failure::new("loki is a secret")));
    }
    (pantheon.find(id).cloned().into(), None)
}

fn fetch(pantheon: &Pantheon, id: u32) -> OptionalResult<Asgardian> {
    if id == SECRET_ID {
        return OptionalResult::failed(Failure::new("loki is a secret"));
    }
    OptionalResult::from_nullable(pantheon.find(id).cloned())
}

fn handle_optional((possible, err): (Optional<Asgardian>, Option<Failure>)) {
    if let Some(err) = err {
        log::warn!("error: {err}");
        return;
    }

    let signals = possible.get();
    select! {
        recv(signals.some) -> asgardian => match asgardian {
            Ok(asgardian) => log::info!("we got: {}", asgardian.name),
            Err(_) => log::warn!("delivery ended without a value"),
        },
        recv(signals.none) -> _ => log::info!("couldn't find that asgardian"),
    }
}

fn handle(possible: OptionalResult<Asgardian>) {
    let signals = possible.get();
    select! {
        recv(signals.some) -> asgardian => match asgardian {
            Ok(asgardian) => log::info!("we got: {}", asgardian.name),
            Err(_) => log::warn!("delivery ended without a value"),
        },
        recv(signals.none) -> _ => log::info!("couldn't find that asgardian"),
        recv(signals.err) -> err => match err {
            Ok(err) => log::warn!("error: {err}"),
            Err(_) => log::warn!("delivery ended without an error"),
        },
    }
}

fn main() {
    env_logger::init();

    let pantheon = Pantheon::new();
    for id in [1, SECRET_ID, 7] {
        handle_optional(fetch_optional(&pantheon, id));
    }
    for id in [1, SECRET_ID, 7] {
        handle(fetch(&pantheon, id));
    }
}
