use crate::Result;

#[derive(clap::Args, Clone, Debug)]
pub struct DIDDocumentArgs {
    /// Path of the DID document JSON to send, or "-" to read the DID document from stdin.
    #[arg(name = "doc", long, value_name = "PATH", default_value = "-")]
    pub did_document_path: String,
}

impl DIDDocumentArgs {
    pub fn read_did_document(&self) -> Result<serde_json::Value> {
        let did_document = if self.did_document_path == "-" {
            serde_json::from_reader(std::io::stdin())?
        } else {
            let did_document_string = std::fs::read_to_string(self.did_document_path.as_str())?;
            serde_json::from_str(did_document_string.as_str())?
        };
        Ok(did_document)
    }
}
