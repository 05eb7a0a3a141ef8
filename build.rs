use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    mqtt_server: String,
    mqtt_port: u16,
    mqtt_topic_status: String,
    mqtt_topic_csv: String,
    mqtt_topic_raw: String,
    wifi_ssid: String,
    wifi_password: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    let toml_str = fs::read_to_string(Path::new(&manifest_dir).join("cfg.toml"))?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            mqtt_server: {server:?},
            mqtt_port: {port},
            mqtt_topic_status: {status:?},
            mqtt_topic_csv: {csv:?},
            mqtt_topic_raw: {raw:?},
            wifi_ssid: {ssid:?},
            wifi_password: {password:?},
        }};
    "#,
        server = raw.mqtt_server,
        port = raw.mqtt_port,
        status = raw.mqtt_topic_status,
        csv = raw.mqtt_topic_csv,
        raw = raw.mqtt_topic_raw,
        ssid = raw.wifi_ssid,
        password = raw.wifi_password,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
