use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use cropkit::utils::logger::Logger;
use cropkit::commands::{CommandFactory, CropkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CropKit")
        .version("0.1")
        .author("CropKit Contributors")
        .about("Crop image regions into base64 data URLs")
        .arg(
            Arg::new("input")
                .help("Input image file, or a data URL file when inspecting")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract a crop as a base64 data URL")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("File to write the data URL to, stdout when omitted")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("Crop region in pixels (x,y,width,height), full image when omitted")
                .value_name("REGION")
                .required(false),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Output size as WIDTHxHEIGHT, region size when omitted")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Encoding format as a MIME type or alias (png, jpeg, gif, bmp, tiff, webp)")
                .value_name("FORMAT")
                .default_value("image/png")
                .required(false),
        )
        .arg(
            Arg::new("quality")
                .long("quality")
                .help("Encoder quality between 0.0 and 1.0 for lossy formats")
                .value_name("VALUE")
                .default_value("0.92")
                .required(false),
        )
        .arg(
            Arg::new("save-image")
                .long("save-image")
                .help("Additionally save the decoded crop to this image file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "cropkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("cropkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CropkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
