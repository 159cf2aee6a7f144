use anyhow::Result;

use smartcity::session::SessionStore;

pub fn login(sessions: &SessionStore<'_>, email: &str, password: &str) -> Result<()> {
    let session = sessions.login(email, password)?;
    println!("Logged in as {}", session.email);
    Ok(())
}

pub fn logout(sessions: &SessionStore<'_>) -> Result<()> {
    sessions.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(sessions: &SessionStore<'_>) -> Result<()> {
    match sessions.current()? {
        Some(session) => println!(
            "Hello, {} (since {})",
            session.email,
            session.logged_at.format("%Y-%m-%d %H:%M:%S")
        ),
        None => println!("Hello, Guest"),
    }
    Ok(())
}
