//! Certificates sub-client — `/certificates` CRUD.

use crate::client::KongClient;
use crate::domain::certificate::{Certificate, CertificateQuery, CertificateRequest, Certificates};
use crate::domain::path_segment;
use crate::error::SdkError;
use crate::http::with_query;

/// Sub-client for certificate operations.
pub struct CertificatesClient<'a> {
    pub(crate) client: &'a KongClient,
}

impl<'a> CertificatesClient<'a> {
    /// Get a certificate by id or by one of its SNI host names.
    ///
    /// `GET /certificates/{id or sni}`
    pub async fn get(&self, id_or_sni: &str) -> Result<Certificate, SdkError> {
        let url = format!("certificates/{}", path_segment(id_or_sni, "certificate id")?);
        Ok(self.client.http.get(&url).await?)
    }

    /// List certificates. The `next` cursor is returned, not followed; pass
    /// the page's `offset` back in `query` to fetch the following page.
    ///
    /// `GET /certificates?size=&offset=`
    pub async fn get_all(&self, query: Option<&CertificateQuery>) -> Result<Certificates, SdkError> {
        let url = with_query("certificates", query)?;
        Ok(self.client.http.get(&url).await?)
    }

    /// Create a certificate.
    ///
    /// `POST /certificates`
    pub async fn post(&self, request: &CertificateRequest) -> Result<Certificate, SdkError> {
        if request.cert.as_deref().map_or(true, str::is_empty)
            || request.key.as_deref().map_or(true, str::is_empty)
        {
            return Err(SdkError::Validation(
                "cert and key are required to create a certificate".to_string(),
            ));
        }
        Ok(self.client.http.post("certificates", request).await?)
    }

    /// Update the fields set on `request`.
    ///
    /// `PATCH /certificates/{id or sni}`
    pub async fn patch(
        &self,
        id_or_sni: &str,
        request: &CertificateRequest,
    ) -> Result<Certificate, SdkError> {
        let url = format!("certificates/{}", path_segment(id_or_sni, "certificate id")?);
        Ok(self.client.http.patch(&url, request).await?)
    }

    /// Delete a certificate.
    ///
    /// `DELETE /certificates/{id or sni}`
    pub async fn delete(&self, id_or_sni: &str) -> Result<(), SdkError> {
        let url = format!("certificates/{}", path_segment(id_or_sni, "certificate id")?);
        self.client.http.delete(&url).await?;
        Ok(())
    }
}
