use rustc_version::{version_meta, Channel};

fn main() {
    let channel = match version_meta().expect("could not read rustc version").channel {
        Channel::Stable => "CHANNEL_STABLE",
        Channel::Beta => "CHANNEL_BETA",
        Channel::Nightly => "CHANNEL_NIGHTLY",
        Channel::Dev => "CHANNEL_DEV",
    };

    println!("cargo:rustc-cfg={channel}");
    println!("cargo:rerun-if-changed=week-availability/build.rs");
}
