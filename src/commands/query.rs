use crate::api::{NslClient, Transport};
use crate::config::ClientConfig;
use anyhow::Result;
use std::io::Write;

pub fn run_info<T: Transport>(
    client: &NslClient<T>,
    config: &ClientConfig,
    out: &mut impl Write,
) -> Result<()> {
    let body = client.mission_info(config)?;
    print_body(&body, out)
}

pub fn run_list<T: Transport>(
    client: &NslClient<T>,
    config: &ClientConfig,
    out: &mut impl Write,
) -> Result<()> {
    let body = client.list_packets(config)?;
    print_body(&body, out)
}

// Bodies are passed through as received; only a final newline is added.
fn print_body(body: &str, out: &mut impl Write) -> Result<()> {
    out.write_all(body.as_bytes())?;
    if !body.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
