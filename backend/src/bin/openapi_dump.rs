//! Print the OpenAPI document as JSON or YAML.

use clap::{Parser, ValueEnum};
use user_api::ApiDoc;
use utoipa::OpenApi;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(about = "Dump the user API OpenAPI document to stdout")]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn render(format: Format) -> Result<String, Box<dyn std::error::Error>> {
    let doc = ApiDoc::openapi();
    Ok(match format {
        Format::Json => doc.to_pretty_json()?,
        Format::Yaml => doc.to_yaml()?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    println!("{}", render(args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::json(Format::Json, "\"openapi\"")]
    #[case::yaml(Format::Yaml, "openapi:")]
    fn renders_the_user_routes(#[case] format: Format, #[case] marker: &str) {
        let rendered = render(format).expect("render document");
        assert!(rendered.contains(marker), "{rendered}");
        assert!(rendered.contains("/users"));
        assert!(rendered.contains("/user/{id}"));
    }

    #[test]
    fn json_is_the_default_format() {
        let args = Args::try_parse_from(["openapi-dump"]).expect("parse args");
        assert!(matches!(args.format, Format::Json));
    }
}
