use crate::process::CleanTable;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write one season's clean table to `<out_dir>/wsl_results_<year>.csv`.
///
/// The table is written to a sibling temp path first and renamed into
/// place, so a half-written file never lands under the final name.
/// Returns the final path.
pub fn write_season_csv(table: &CleanTable, year: u16, out_dir: &Path) -> Result<PathBuf> {
    let final_path = out_dir.join(format!("wsl_results_{year}.csv"));
    let tmp_path = out_dir.join(format!("wsl_results_{year}.csv.tmp"));

    let mut writer = csv::Writer::from_path(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        let mut record = Vec::with_capacity(table.headers.len());
        record.push(row.name.clone());
        for rank in &row.placements {
            record.push(rank.map(|r| r.to_string()).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, &final_path)
        .with_context(|| format!("renaming into {}", final_path.display()))?;
    Ok(final_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::CleanRow;

    fn sample_table() -> CleanTable {
        CleanTable {
            headers: vec!["Name".into(), "portugal".into(), "teahupoo".into()],
            rows: vec![
                CleanRow {
                    name: "Gabriel Medina".into(),
                    placements: vec![Some(1), Some(2)],
                },
                CleanRow {
                    name: "Conner Coffin".into(),
                    placements: vec![None, Some(3)],
                },
            ],
        }
    }

    #[test]
    fn writes_one_csv_per_season() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_season_csv(&sample_table(), 2019, dir.path())?;

        assert_eq!(path.file_name().unwrap(), "wsl_results_2019.csv");
        let contents = fs::read_to_string(&path)?;
        assert_eq!(
            contents,
            "Name,portugal,teahupoo\nGabriel Medina,1,2\nConner Coffin,,3\n"
        );
        Ok(())
    }

    #[test]
    fn no_temp_file_survives_a_successful_write() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_season_csv(&sample_table(), 2021, dir.path())?;
        assert!(!dir.path().join("wsl_results_2021.csv.tmp").exists());
        Ok(())
    }
}
