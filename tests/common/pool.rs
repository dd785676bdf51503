use std::{
    net::SocketAddr,
    sync::{mpsc, Arc, Mutex},
    thread,
};

use actix_web::{
    dev::ServerHandle, http::StatusCode, rt::System, web, App, HttpResponse, HttpServer,
};
use serde_json::Value;

type SyncedBodies = Arc<Mutex<Vec<Value>>>;

struct PoolState {
    status: StatusCode,
    reply: String,
    received: SyncedBodies,
}

async fn add_transaction(state: web::Data<PoolState>, body: web::Json<Value>) -> HttpResponse {
    state.received.lock().unwrap().push(body.into_inner());

    HttpResponse::build(state.status)
        .content_type("application/json")
        .body(state.reply.clone())
}

/// Transaction pool stand-in answering every `POST /transactions` with a
/// fixed status and body.
pub struct MockPool {
    pub base_url: String,
    received: SyncedBodies,
    handle: ServerHandle,
}

impl MockPool {
    fn serve(state: web::Data<PoolState>) -> (SocketAddr, ServerHandle) {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let _ = System::new().block_on(async move {
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(state.clone())
                        .route("/transactions", web::post().to(add_transaction))
                })
                .workers(1)
                .bind(("127.0.0.1", 0))
                .unwrap();

                let address = server.addrs()[0];
                let server = server.run();
                sender.send((address, server.handle())).unwrap();

                server.await
            });
        });

        receiver.recv().unwrap()
    }

    pub fn start(status: u16, reply: &str) -> MockPool {
        let received = SyncedBodies::default();
        let state = web::Data::new(PoolState {
            status: StatusCode::from_u16(status).unwrap(),
            reply: reply.to_string(),
            received: received.clone(),
        });

        let (address, handle) = MockPool::serve(state);

        MockPool {
            base_url: format!("http://{}", address),
            received,
            handle,
        }
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

/**
 * Stopping the pool on drop frees its port and worker thread even when
 * an assertion panics halfway through a test.
 */
impl Drop for MockPool {
    fn drop(&mut self) {
        let _ = self.handle.stop(false);
    }
}
