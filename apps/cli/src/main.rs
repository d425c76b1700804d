use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ptp_core::{
    DeviceConfig, ExtensionMode, NusbTransport, ObjectFormatCode, PropertyCode, PtpDevice,
};
use tracing::{error, info, warn};

const ALL_STORES: u32 = 0xFFFF_FFFF;

#[derive(Parser, Debug)]
#[command(author, version, about = "PTP device tool (Pure Rust)", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Extension: auto, raw or a vendor name (overrides the config file)
    #[arg(short, long, global = true)]
    extension: Option<String>,

    /// USB vendor ID, e.g. 0x19cf
    #[arg(long, global = true, value_parser = parse_u16)]
    vid: Option<u16>,

    /// USB product ID
    #[arg(long, global = true, value_parser = parse_u16)]
    pid: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show DeviceInfo and the selected extension
    Info,
    /// List stores and their capacity
    Storage,
    /// List objects
    List {
        /// Only this storage ID
        #[arg(long, value_parser = parse_u32)]
        storage: Option<u32>,
    },
    /// Show property descriptions, or the value of one property
    Props {
        /// Property name (e.g. BatteryLevel) or code (e.g. 0x5001)
        property: Option<String>,
    },
    /// Print device events until the link goes away
    Events {
        /// Stop after this many events
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Write a default configuration file
    Config {
        /// Output path
        #[arg(default_value = "ptp.toml")]
        path: PathBuf,
    },
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", s, e))
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let value = parse_u32(s)?;
    u16::try_from(value).map_err(|_| format!("'{}' does not fit in 16 bits", s))
}

fn load_config(args: &Args) -> Result<DeviceConfig> {
    let mut config = match &args.config {
        Some(path) => DeviceConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DeviceConfig::default(),
    };
    if let Some(extension) = &args.extension {
        // Validate before it reaches the device.
        extension.parse::<ExtensionMode>()?;
        config.extension = extension.clone();
    }
    if args.vid.is_some() {
        config.usb_vendor_id = args.vid;
    }
    if args.pid.is_some() {
        config.usb_product_id = args.pid;
    }
    Ok(config)
}

fn open_device(config: DeviceConfig) -> Result<PtpDevice<NusbTransport>> {
    let transport = NusbTransport::open_matching(config.usb_filter(), config.timeout_ms)?;
    let device = PtpDevice::connect(transport, config)?;
    let info = device.info();
    info!(
        manufacturer = %info.manufacturer,
        model = %info.model,
        extension = %device.extension(),
        "Device connected"
    );
    Ok(device)
}

fn show_info(device: &PtpDevice<NusbTransport>) {
    let info = device.info();
    let ext = device.extension();
    println!("Manufacturer:  {}", info.manufacturer);
    println!("Model:         {}", info.model);
    println!("Version:       {}", info.device_version);
    println!("Serial:        {}", info.serial_number);
    println!(
        "Extension:     {} (0x{:08X} v{}) {}",
        ext.name(),
        info.vendor_extension_id,
        info.vendor_extension_version,
        info.vendor_extension_desc
    );
    println!("Operations ({}):", info.operations_supported.len());
    for op in &info.operations_supported {
        println!("  {}", ext.operation_label(*op));
    }
    println!("Events ({}):", info.events_supported.len());
    for event in &info.events_supported {
        println!("  {}", ext.event_label(*event));
    }
    println!("Properties ({}):", info.device_properties_supported.len());
    for prop in &info.device_properties_supported {
        println!("  {}", ext.property_label(*prop));
    }
    let formats: Vec<String> = info
        .image_formats
        .iter()
        .map(|f| ext.object_format_label(*f))
        .collect();
    println!("Image formats: {}", formats.join(", "));
}

fn show_storage(device: &PtpDevice<NusbTransport>) -> Result<()> {
    let _session = device.session()?;
    for id in device.get_storage_ids()? {
        let storage = device.get_storage_info(id)?;
        println!(
            "0x{:08X}  {:>12} / {:>12} bytes free  {}{}",
            id,
            storage.free_space_in_bytes,
            storage.max_capacity,
            storage.storage_description,
            if storage.is_writable() { "" } else { " (read-only)" }
        );
    }
    Ok(())
}

fn list_objects(device: &PtpDevice<NusbTransport>, storage: Option<u32>) -> Result<()> {
    let _session = device.session()?;
    let ext = device.extension();
    let handles =
        device.get_object_handles(storage.unwrap_or(ALL_STORES), ObjectFormatCode::ANY, 0)?;
    for handle in handles {
        match device.get_object_info(handle) {
            Ok(object) => println!(
                "0x{:08X}  {:<16} {:>10}  {}",
                handle,
                ext.object_format_label(object.object_format),
                object.object_compressed_size,
                object.filename
            ),
            Err(e) => warn!(handle, error = %e, "GetObjectInfo failed"),
        }
    }
    Ok(())
}

fn show_props(device: &PtpDevice<NusbTransport>, property: Option<&str>) -> Result<()> {
    let ext = device.extension();
    let Some(name) = property else {
        let loaded = device.load_property_descriptions()?;
        info!(loaded, "Property descriptions");
        for desc in device.known_properties() {
            println!(
                "{:<32} {:<6} {} = {} (default {})",
                ext.property_label(desc.property_code),
                desc.data_type,
                if desc.is_writable() { "rw" } else { "ro" },
                desc.current,
                desc.factory_default
            );
        }
        return Ok(());
    };

    let code = match ext.property_code(name) {
        Some(code) => code,
        None => PropertyCode(
            parse_u16(name).map_err(|_| anyhow::anyhow!("unknown property '{}'", name))?,
        ),
    };
    let _session = device.session()?;
    let desc = device.get_device_prop_desc(code)?;
    let value = device.get_device_prop_value(code)?;
    println!("{} = {}", ext.property_label(code), value);
    println!("  type:    {}", desc.data_type);
    println!("  access:  {}", if desc.is_writable() { "read-write" } else { "read-only" });
    println!("  default: {}", desc.factory_default);
    println!("  form:    {:?}", desc.form);
    Ok(())
}

fn watch_events(device: &PtpDevice<NusbTransport>, count: Option<usize>) -> Result<()> {
    let _session = device.session()?;
    let limit = count.unwrap_or(usize::MAX);
    for event in device.events().take(limit) {
        match event {
            Ok(event) => println!("{}", event),
            Err(e) => warn!(error = %e, "Event poll failed"),
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    if let Command::Config { path } = &args.command {
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        load_config(args)?.save_to_file(path)?;
        info!(path = %path.display(), "Configuration written");
        return Ok(());
    }

    let device = open_device(load_config(args)?)?;
    let result = match &args.command {
        Command::Info => {
            show_info(&device);
            Ok(())
        }
        Command::Storage => show_storage(&device),
        Command::List { storage } => list_objects(&device, *storage),
        Command::Props { property } => show_props(&device, property.as_deref()),
        Command::Events { count } => watch_events(&device, *count),
        Command::Config { .. } => Ok(()),
    };
    if let Err(e) = device.close() {
        warn!(error = %e, "Close failed");
    }
    result
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(if args.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                })
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run(&args) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
