//! Local poem server answering canned JSON bodies for adapter tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use poem::http::{Method, StatusCode, Uri};
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::web::Data;
use poem::{EndpointExt, Response, Route as PoemRoute, RouteMethod, Server as PoemServer, handler};

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn new(method: &'static str, path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[handler]
async fn respond(method: Method, uri: &Uri, Data(canned): Data<&Canned>, body: String) -> Response {
    canned.recorded.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        body,
    });

    Response::builder()
        .status(canned.status)
        .content_type("application/json")
        .body(canned.body.clone())
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    /// Serves every route on an ephemeral port. Unregistered paths answer 404.
    pub async fn spawn(routes: Vec<Route>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let mut by_path: BTreeMap<String, RouteMethod> = BTreeMap::new();
        for route in routes {
            let canned = Canned {
                status: StatusCode::from_u16(route.status).unwrap(),
                body: route.body,
                recorded: requests.clone(),
            };
            let method = Method::from_bytes(route.method.as_bytes()).unwrap();
            let methods = by_path.remove(&route.path).unwrap_or_else(RouteMethod::new);
            by_path.insert(route.path, methods.method(method, respond.data(canned)));
        }

        let app = by_path
            .into_iter()
            .fold(PoemRoute::new(), |app, (path, methods)| app.at(path, methods));

        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .unwrap();
        let address = *acceptor.local_addr()[0].as_socket_addr().unwrap();

        tokio::spawn(async move {
            let _ = PoemServer::new_with_acceptor(acceptor).run(app).await;
        });

        Self {
            base_url: format!("http://{}", address),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_route_by_path_and_method_ignoring_query() {
        let server = TestServer::spawn(vec![
            Route::new("GET", "/favorites", 200, "[]"),
            Route::new("POST", "/favorites", 201, "{\"id\":1}"),
        ])
        .await;
        let client = reqwest::Client::new();

        let listed = client
            .get(format!("{}/favorites?page=1", server.base_url))
            .send()
            .await
            .unwrap();
        let created = client
            .post(format!("{}/favorites", server.base_url))
            .body("{\"id\":1}")
            .send()
            .await
            .unwrap();

        assert_eq!(listed.status(), 200);
        assert_eq!(created.status(), 201);
        let requests = server.requests();
        assert_eq!(requests[0].path, "/favorites");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].body, "{\"id\":1}");
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_paths() {
        let server = TestServer::spawn(vec![]).await;

        let response = reqwest::get(format!("{}/foods/9", server.base_url))
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
    }
}
