use axum::Json;

use heytherapy_core::questions::{self, Question};

pub async fn list_questions() -> Json<Vec<Question>> {
    Json(questions::catalogue())
}
