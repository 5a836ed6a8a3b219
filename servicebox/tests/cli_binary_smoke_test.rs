use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_servicebox")
}

fn unique_test_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve test port");
    let port = listener
        .local_addr()
        .expect("failed to read test port")
        .port();
    drop(listener);
    port
}

fn wait_for_port(port: u16, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if std::net::TcpStream::connect(("127.0.0.1", port)).is_ok() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    false
}

#[test]
fn unknown_service_exits_with_error_and_lists_names() {
    let port = unique_test_port();
    let started = Instant::now();
    let output = Command::new(bin_path())
        .args(["--name", "bogus-service", "--port", &port.to_string()])
        .output()
        .expect("failed to run servicebox");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown service: bogus-service"),
        "unexpected stderr: {stderr}"
    );
    assert!(
        stderr.contains("Available: auth-service, payment-service, notification-service"),
        "unexpected stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
    // スリープせずに終了すること
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(std::net::TcpStream::connect(("127.0.0.1", port)).is_err());
}

#[test]
fn missing_port_is_a_usage_error() {
    let output = Command::new(bin_path())
        .args(["--name", "auth-service"])
        .output()
        .expect("failed to run servicebox");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--port"), "unexpected stderr: {stderr}");
}

#[test]
fn list_prints_registry() {
    let output = Command::new(bin_path())
        .arg("--list")
        .output()
        .expect("failed to run servicebox --list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("auth-service\t2s\t"), "{stdout}");
    assert!(stdout.contains("payment-service\t3s\t"), "{stdout}");
    assert!(stdout.contains("notification-service\t1s\t"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn sigterm_logs_shutdown_and_exits_zero() {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let port = unique_test_port();
    let child = Command::new(bin_path())
        .args([
            "--name",
            "notification-service",
            "--port",
            &port.to_string(),
            "--host",
            "127.0.0.1",
            "--startup-delay",
            "0",
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn servicebox");

    assert!(
        wait_for_port(port, Duration::from_secs(10)),
        "service never started listening"
    );

    let mut stream =
        std::net::TcpStream::connect(("127.0.0.1", port)).expect("failed to connect to servicebox");
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .expect("failed to send request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .expect("failed to read response");
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");

    kill(Pid::from_raw(child.id() as i32), Signal::SIGTERM).expect("failed to send SIGTERM");
    let output = child.wait_with_output().expect("failed to wait for servicebox");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(
        lines
            .iter()
            .all(|line| line.starts_with('[') && line.contains("] [notification-service] ")),
        "unexpected stdout: {stdout}"
    );
    assert!(stdout.contains(&format!("Starting on port {}", port)), "{stdout}");
    assert!(stdout.contains("Initializing... (takes ~0s)"), "{stdout}");
    assert!(
        stdout.contains(&format!("Ready. Listening on http://localhost:{}", port)),
        "{stdout}"
    );
    assert!(
        lines
            .iter()
            .any(|line| line.ends_with("] [notification-service] \"GET /health HTTP/1.1\" 200 -")),
        "{stdout}"
    );
    assert!(
        lines
            .last()
            .is_some_and(|line| line.ends_with("Received signal 15, shutting down...")),
        "{stdout}"
    );
}

#[cfg(unix)]
#[test]
fn sigint_during_startup_delay_exits_before_listening() {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let port = unique_test_port();
    let child = Command::new(bin_path())
        .args([
            "--name",
            "payment-service",
            "--port",
            &port.to_string(),
            "--host",
            "127.0.0.1",
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn servicebox");

    // シグナルハンドラ登録を待つ
    std::thread::sleep(Duration::from_millis(500));
    assert!(std::net::TcpStream::connect(("127.0.0.1", port)).is_err());

    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).expect("failed to send SIGINT");
    let output = child.wait_with_output().expect("failed to wait for servicebox");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initializing... (takes ~3s)"), "{stdout}");
    assert!(!stdout.contains("Ready."), "{stdout}");
    assert!(
        stdout.contains("Received signal 2, shutting down..."),
        "{stdout}"
    );
}
