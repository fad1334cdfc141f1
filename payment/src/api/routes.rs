use crate::api::resources::{ReceiptBody, ReceiptResponse};
use crate::domain::commands::{CreateReceiptCommand, DeleteReceiptCommand, UpdateReceiptCommand};
use crate::domain::models::{Receipt, ReceiptId, ResidentId};
use crate::service::{ReceiptCommandService, ReceiptError, ReceiptQueryService};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

pub const RECEIPTS_PATH: &str = "/api/v1/receipts";

fn parse_body(req_body: &str) -> Result<ReceiptBody, HttpResponse> {
    serde_json::from_str::<ReceiptBody>(req_body)
        .map_err(|err| HttpResponse::BadRequest().body(format!("invalid receipt: {}", err)))
}

fn error_response(err: ReceiptError) -> HttpResponse {
    match &err {
        ReceiptError::NotFound(_) => HttpResponse::NotFound().body(err.to_string()),
        ReceiptError::Storage(source) => {
            log::error!(error:? = source; "Receipt storage failure");
            HttpResponse::BadRequest().body(err.to_string())
        }
        ReceiptError::Validation(_) | ReceiptError::Conflict(_) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}

fn to_responses(receipts: Vec<Receipt>) -> Vec<ReceiptResponse> {
    receipts.into_iter().map(ReceiptResponse::from).collect()
}

#[post("")]
async fn create_receipt(
    req_body: String,
    commands: web::Data<ReceiptCommandService>,
    queries: web::Data<ReceiptQueryService>,
) -> impl Responder {
    let body = match parse_body(&req_body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let receipt_id = match commands
        .create(CreateReceiptCommand {
            details: body.into(),
        })
        .await
    {
        Ok(id) => id,
        Err(err) => {
            log::info!(error:% = err; "Receipt not created");
            return error_response(err);
        }
    };

    match queries.get_by_id(receipt_id).await {
        Ok(Some(receipt)) => HttpResponse::Created().json(ReceiptResponse::from(receipt)),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => error_response(err),
    }
}

#[get("")]
async fn get_all_receipts(queries: web::Data<ReceiptQueryService>) -> impl Responder {
    match queries.get_all().await {
        Ok(receipts) => HttpResponse::Ok().json(to_responses(receipts)),
        Err(err) => error_response(err),
    }
}

#[get("/resident/{resident_id}")]
async fn get_receipts_by_resident_id(
    queries: web::Data<ReceiptQueryService>,
    resident_id: web::Path<i64>,
) -> impl Responder {
    match queries
        .get_by_resident_id(ResidentId(resident_id.into_inner()))
        .await
    {
        Ok(receipts) if receipts.is_empty() => HttpResponse::NoContent().finish(),
        Ok(receipts) => HttpResponse::Ok().json(to_responses(receipts)),
        Err(err) => error_response(err),
    }
}

#[get("/{receipt_id}")]
async fn get_receipt_by_id(
    queries: web::Data<ReceiptQueryService>,
    receipt_id: web::Path<ReceiptId>,
) -> impl Responder {
    let receipt_id = receipt_id.into_inner();
    match queries.get_by_id(receipt_id).await {
        Ok(Some(receipt)) => HttpResponse::Ok().json(ReceiptResponse::from(receipt)),
        Ok(None) => HttpResponse::NotFound().body(ReceiptError::NotFound(receipt_id).to_string()),
        Err(err) => error_response(err),
    }
}

#[put("/{receipt_id}")]
async fn update_receipt(
    req_body: String,
    receipt_id: web::Path<ReceiptId>,
    commands: web::Data<ReceiptCommandService>,
) -> impl Responder {
    let body = match parse_body(&req_body) {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let command = UpdateReceiptCommand {
        receipt_id: receipt_id.into_inner(),
        details: body.into(),
    };
    match commands.update(command).await {
        Ok(receipt) => HttpResponse::Ok().json(ReceiptResponse::from(receipt)),
        Err(err) => {
            log::info!(error:% = err; "Receipt not updated");
            error_response(err)
        }
    }
}

#[delete("/{receipt_id}")]
async fn delete_receipt(
    receipt_id: web::Path<ReceiptId>,
    commands: web::Data<ReceiptCommandService>,
) -> impl Responder {
    let command = DeleteReceiptCommand {
        receipt_id: receipt_id.into_inner(),
    };
    match commands.delete(command).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
