use std::path::Path;

use anyhow::Context;
use chron_changelog::RangeRequest;

use crate::bootstrap::Settings;
use crate::progress::Progress;

/// Run the pipeline and write the rendered document to the output path.
///
/// Nothing is written unless the whole pipeline succeeds.
pub async fn handle(request: &RangeRequest, settings: &Settings, quiet: bool) -> anyhow::Result<()> {
    let client = settings.client()?;
    let progress = Progress::spinner(
        &format!("Generating changelog for {}", settings.repo),
        !quiet,
    );

    let changelog = match chron_changelog::generate(&client, request, &settings.web_url).await {
        Ok(changelog) => changelog,
        Err(error) => {
            progress.finish_err("changelog generation failed");
            return Err(error).context("failed to generate changelog");
        }
    };

    progress.set_message("Rendering");
    let document = changelog.render(&settings.web_url, &settings.repo);
    write_document(&settings.output, &document)?;

    tracing::info!(
        output = %settings.output.display(),
        start = changelog.range.start_label.as_str(),
        end = changelog.range.end_label.as_str(),
        "changelog written"
    );
    progress.finish_ok(&format!("Wrote {}", settings.output.display()));
    Ok(())
}

fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    std::fs::write(path, document)
        .with_context(|| format!("failed to write changelog to {}", path.display()))
}
