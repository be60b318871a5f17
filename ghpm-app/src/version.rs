pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const PLATFORMS: [&str; 5] = [
    "linux/amd64",
    "linux/x86_64",
    "linux/arm64",
    "darwin/arm64",
    "darwin/amd64",
];

pub fn version_line() -> String {
    format!("'v{}' ({})", VERSION, PLATFORMS.join(", "))
}

pub fn run() {
    println!("{}", version_line());
}
