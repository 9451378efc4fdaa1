use crate::application::dto::{ResolutionReport, ResolvedDependency};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const TABLE_HEADER: &str = "| Dependency | Version | Packaging | First depender | Download |\n";
const TABLE_SEPARATOR: &str = "|------------|---------|-----------|----------------|----------|\n";

/// MarkdownReportFormatter adapter producing a human-readable report
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn download_cell(dependency: &ResolvedDependency) -> String {
        match &dependency.download_url {
            Some(url) => format!("[{}]({})", dependency.packaging, url),
            None if dependency.is_metadata_only() => "metadata only".to_string(),
            None => "**not found**".to_string(),
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String) {
        output.push_str("# Maven Dependency Resolution Report\n\n");
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[ResolvedDependency]) {
        output.push_str("## Resolved Dependencies\n\n");
        output.push_str(&format!(
            "{} unique dependencies after highest-version mediation.\n\n",
            dependencies.len()
        ));

        if dependencies.is_empty() {
            output.push_str("*No dependencies resolved*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for dependency in dependencies {
            output.push_str(&format!(
                "| {}:{} | {} | {} | {} | {} |\n",
                Self::escape_cell(&dependency.group_id),
                Self::escape_cell(&dependency.artifact_id),
                Self::escape_cell(&dependency.version),
                Self::escape_cell(&dependency.packaging),
                Self::escape_cell(&dependency.first_depender),
                Self::download_cell(dependency)
            ));
        }
        output.push('\n');
    }

    fn render_missing(&self, output: &mut String, report: &ResolutionReport) {
        let missing: Vec<String> = report.missing_artifacts().map(|d| d.gav()).collect();
        if missing.is_empty() {
            return;
        }

        output.push_str("## Missing Artifacts\n\n");
        output.push_str("No configured repository serves a binary for these dependencies.\n\n");
        for gav in missing {
            output.push_str(&format!("- `{}`\n", gav));
        }
        output.push('\n');
    }

    fn render_warnings(&self, output: &mut String, warnings: &[String]) {
        output.push_str("## Warnings\n\n");
        if warnings.is_empty() {
            output.push_str("*No warnings*\n");
            return;
        }
        for warning in warnings {
            output.push_str(&format!("- {}\n", warning.replace('\n', " ")));
        }
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output);

        match report {
            ResolutionReport::Completed { dependencies, .. } => {
                self.render_dependencies(&mut output, dependencies);
                self.render_missing(&mut output, report);
            }
            ResolutionReport::Failed { error, .. } => {
                output.push_str("## Resolution Failed\n\n");
                output.push_str(&format!("```\n{}\n```\n\n", error));
            }
        }

        self.render_warnings(&mut output, report.warnings());
        Ok(output)
    }
}
