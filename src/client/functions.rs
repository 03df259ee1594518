//! Function operations

use super::{Client, ListOptions};
use crate::error::Result;
use crate::models::{Function, FunctionList};
use crate::pagination::Pager;

impl Client {
    /// Fetch one page of functions
    pub async fn list_functions(
        &self,
        project_id: &str,
        start: Option<&str>,
        options: &ListOptions,
    ) -> Result<FunctionList> {
        self.http()
            .get_json(
                &format!("projects/{project_id}/functions"),
                Self::list_request(options, start),
            )
            .await
    }

    /// Pager over a project's functions
    pub fn functions(&self, project_id: &str, options: ListOptions) -> Pager<Function> {
        let client = self.clone();
        let project_id = project_id.to_string();
        Pager::new(move |start: Option<String>| {
            let client = client.clone();
            let project_id = project_id.clone();
            let options = options.clone();
            async move {
                client
                    .list_functions(&project_id, start.as_deref(), &options)
                    .await
                    .map(FunctionList::into_page)
            }
        })
    }
}
