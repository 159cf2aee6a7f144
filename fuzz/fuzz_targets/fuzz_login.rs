#![no_main]

//! Fuzz target for the mock login: arbitrary Unicode in both fields must
//! either be rejected with nothing stored, or produce a session that
//! parses back.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use smartcity::blob::MemoryBlobStore;
use smartcity::session::SessionStore;

#[derive(Arbitrary, Debug)]
struct LoginInput {
    email: String,
    password: String,
}

fuzz_target!(|input: LoginInput| {
    let blobs = MemoryBlobStore::new();
    let sessions = SessionStore::new(&blobs);

    match sessions.login(&input.email, &input.password) {
        Ok(session) => {
            assert!(sessions.is_authenticated().unwrap());
            assert_eq!(sessions.current().unwrap(), Some(session));
            sessions.logout().unwrap();
            assert!(!sessions.is_authenticated().unwrap());
        }
        Err(e) => {
            assert!(e.is_validation());
            assert!(!sessions.is_authenticated().unwrap());
        }
    }
});
