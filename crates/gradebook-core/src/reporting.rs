use std::path::Path;

use crate::domain::Result;
use crate::result_sheet::ResultSheet;

/// Write a result sheet as pretty JSON.
pub fn write_result_json(path: &Path, sheet: &ResultSheet) -> Result<()> {
    let content = serde_json::to_string_pretty(sheet)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Render a result sheet as a Markdown table for terminal output.
pub fn render_result_md(sheet: &ResultSheet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# Result: level {} semester {}\n\n",
        sheet.position.level, sheet.position.semester
    ));
    out.push_str(&format!("- admission mode: {}\n\n", sheet.admission_mode));

    out.push_str("| Code | Title | Unit | Grade |\n");
    out.push_str("|------|-------|------|-------|\n");
    for c in &sheet.courses {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            c.code, c.title, c.unit, c.grade
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "- total units: {}\n- quality points: {}\n- GPA: {:.2}\n- previous CGPA: {:.2}\n- CGPA: {:.2}\n",
        sheet.total_units, sheet.quality_points, sheet.gpa, sheet.prev_cgpa, sheet.cgpa
    ));
    out
}

/// Write the Markdown rendering of a result sheet.
pub fn write_result_md(path: &Path, sheet: &ResultSheet) -> Result<()> {
    std::fs::write(path, render_result_md(sheet))?;
    Ok(())
}
