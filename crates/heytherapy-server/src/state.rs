use std::sync::Arc;

use heytherapy_bedrock::models::ModelSelection;
use heytherapy_bedrock::report::ReportGenerator;
use heytherapy_storage::store::RecordStore;
use jiff::civil::Date;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub reports: Arc<dyn ReportGenerator>,
    pub model: Arc<ModelSelection>,
    /// Date stamped on new check-ins.
    pub today: fn() -> Date,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        reports: Arc<dyn ReportGenerator>,
        model: ModelSelection,
    ) -> Self {
        Self {
            store,
            reports,
            model: Arc::new(model),
            today: local_today,
        }
    }
}

fn local_today() -> Date {
    jiff::Zoned::now().date()
}
