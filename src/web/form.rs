use super::WebError;
use axum::extract::Multipart;
use std::collections::HashMap;

/// Text fields and non-empty file uploads of one multipart form.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl UploadForm {
    /// Drain `multipart`. A file input left empty by the browser is skipped.
    pub async fn read(multipart: &mut Multipart) -> Result<Self, WebError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if field.file_name().is_some() {
                let data = field.bytes().await?;
                if !data.is_empty() {
                    form.files.insert(name, data.to_vec());
                }
            } else {
                form.fields.insert(name, field.text().await?);
            }
        }
        Ok(form)
    }

    /// Field value, empty when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Trimmed field value, which must not be empty.
    pub fn required(&self, name: &str) -> Result<String, WebError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| WebError::BadRequest(format!("Missing field '{name}'")))
    }

    pub fn take_file(&mut self, name: &str) -> Option<Vec<u8>> {
        self.files.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(fields: &[(&str, &str)]) -> UploadForm {
        UploadForm {
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            files: HashMap::from([("image".to_string(), vec![1, 2, 3])]),
        }
    }

    #[test]
    fn test_required_trims_and_rejects_blank() {
        let form = upload(&[("name", "  Drill Press "), ("price", "  ")]);
        assert_eq!(form.required("name").unwrap(), "Drill Press");
        assert!(matches!(form.required("price"), Err(WebError::BadRequest(_))));
        assert!(form.required("sku").is_err());
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let form = upload(&[("price", "12")]);
        assert_eq!(form.text("price"), "12");
        assert_eq!(form.text("size"), "");
    }

    #[test]
    fn test_take_file_removes_it() {
        let mut form = upload(&[]);
        assert_eq!(form.take_file("image"), Some(vec![1, 2, 3]));
        assert_eq!(form.take_file("image"), None);
        assert_eq!(form.take_file("location_image"), None);
    }
}
