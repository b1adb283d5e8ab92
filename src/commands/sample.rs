use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Example component inventory in the expected input layout.
pub const SAMPLE_CSV: &str = "\
index,file,component_type,unique_name
1,job1.kjb,tMap,tMap_1
2,job1.kjb,tSnowflakeOutput,tSnowflakeOutput_1
3,job2.kjb,tRunJob,tRunJob_1
4,job2.kjb,tMap,tMap_2
5,job3.kjb,tSnowflakeInput,tSnowflakeInput_1
";

pub fn write_sample(output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, SAMPLE_CSV)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(SAMPLE_CSV.as_bytes())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_component_rows;

    #[test]
    fn test_sample_is_valid_input() {
        let rows = read_component_rows(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].component_type, "tRunJob");
    }
}
