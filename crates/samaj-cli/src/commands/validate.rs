use serde::Serialize;
use serde::de::DeserializeOwned;

use samaj_core::entities::{ChandaEntry, Chokhla, Family, Person, Poll, ProfileUpdate, Village};
use samaj_core::validation::{self, FieldErrors};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{FormKind, ValidateArgs};
use crate::commands::shared::payload::read_json;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    errors: FieldErrors,
}

/// Handle `samaj validate`. Runs entirely offline.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = check(args.kind, &args.file, args.household.as_deref())?;
    let response = ValidateResponse {
        valid: result.is_ok(),
        errors: result.err().unwrap_or_default(),
    };
    output(&response, flags.format)?;
    if !response.valid {
        anyhow::bail!("{} field(s) failed validation", response.errors.len());
    }
    Ok(())
}

fn check(kind: FormKind, file: &str, household: Option<&str>) -> anyhow::Result<Result<(), FieldErrors>> {
    Ok(match kind {
        FormKind::Family => validation::validate_family(&load::<Family>(file)?),
        FormKind::Member => {
            let existing: Vec<Person> = household.map(read_json).transpose()?.unwrap_or_default();
            let member: Person = load(file)?;
            if member.id.is_empty() {
                validation::validate_member_addition(&existing, &member)
            } else {
                validation::validate_member_update(&existing, &member)
            }
        }
        FormKind::Village => validation::validate_village(&load::<Village>(file)?),
        FormKind::Chokhla => validation::validate_chokhla(&load::<Chokhla>(file)?),
        FormKind::Poll => validation::validate_poll(&load::<Poll>(file)?),
        FormKind::Chanda => validation::validate_chanda_entry(&load::<ChandaEntry>(file)?),
        FormKind::Profile => validation::validate_profile(&load::<ProfileUpdate>(file)?),
    })
}

fn load<T: DeserializeOwned>(file: &str) -> anyhow::Result<T> {
    read_json(file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn json_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(body.as_bytes()).expect("write");
        file
    }

    #[test]
    fn family_without_mukhiya_is_reported() {
        let file = json_file(
            r#"{"villageId":"vil-1","mukhiyaName":"Ramesh","currentAddress":"Main road",
                "members":[{"firstName":"Suresh","lastName":"Panchal","isMukhiya":false}]}"#,
        );
        let path = file.path().to_string_lossy().into_owned();
        let errors = check(FormKind::Family, &path, None)
            .expect("file should load")
            .expect_err("family should be invalid");
        assert!(errors.contains("mukhiya"));
    }

    #[test]
    fn member_is_checked_against_household() {
        let household = json_file(
            r#"[{"id":"mem-1","firstName":"Ramesh","lastName":"Panchal","isMukhiya":true}]"#,
        );
        let member = json_file(r#"{"firstName":"Mahesh","lastName":"Panchal","isMukhiya":true}"#);
        let household_path = household.path().to_string_lossy().into_owned();
        let member_path = member.path().to_string_lossy().into_owned();

        let errors = check(FormKind::Member, &member_path, Some(&household_path))
            .expect("files should load")
            .expect_err("second mukhiya should be refused");
        assert!(errors.contains("isMukhiya"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let file = json_file("{not json");
        let path = file.path().to_string_lossy().into_owned();
        assert!(check(FormKind::Chokhla, &path, None).is_err());
    }
}
