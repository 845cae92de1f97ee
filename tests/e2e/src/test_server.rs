use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// `dx serve` for the web package on a free port, killed on drop.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = get_random_port()?;

        let process = Command::new("dx")
            .args([
                "serve",
                "--package",
                "web",
                "--platform",
                "web",
                "--port",
                &port.to_string(),
                "--open",
                "false",
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let url = format!("http://localhost:{}", port);
        let server = Self {
            url,
            process: Some(process),
        };

        wait_for_server(&server.url).await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // First builds compile the whole workspace to wasm; allow five minutes.
    for i in 0..3000 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 100 == 0 {
            eprintln!("Still waiting for dx serve... ({}s)", i / 10);
        }
    }
    anyhow::bail!("dx serve did not come up in time (waited 300s)")
}
