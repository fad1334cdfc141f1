use crate::api::routes::{
    create_receipt, delete_receipt, get_all_receipts, get_receipt_by_id,
    get_receipts_by_resident_id, update_receipt, RECEIPTS_PATH,
};
use crate::domain::repository::ReceiptRepository;
use crate::domain::service::NotificationService;
use crate::service::{ReceiptCommandService, ReceiptQueryService};
use actix_web::web;
use actix_web::web::ServiceConfig;
use std::sync::Arc;

pub fn create_app(
    receipt_repo: Arc<dyn ReceiptRepository>,
    notifications: Arc<dyn NotificationService>,
) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        let commands = web::Data::new(ReceiptCommandService::new(
            Arc::clone(&receipt_repo),
            Arc::clone(&notifications),
        ));
        let queries = web::Data::new(ReceiptQueryService::new(Arc::clone(&receipt_repo)));

        cfg.app_data(commands).app_data(queries).service(
            web::scope(RECEIPTS_PATH)
                .service(create_receipt)
                .service(get_all_receipts)
                .service(get_receipts_by_resident_id)
                .service(get_receipt_by_id)
                .service(update_receipt)
                .service(delete_receipt),
        );
    })
}
