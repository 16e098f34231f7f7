mod grammar;
mod invariants;
mod recovery;
