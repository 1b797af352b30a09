#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use groupiecli::{
    error::{TransportError, TransportKind},
    management::{CatalogCache, Snapshot},
    provider::{Fetcher, Provider, ProviderConfig, Resource},
    types::{Artist, ConcertDate, Location, Relation},
};
use serde::Serialize;
use serde_json::json;
use tokio::time::sleep;

pub const BASE_URL: &str = "mock://catalog";

enum Reply {
    Body(Vec<u8>),
    Fail(TransportKind),
}

/// In-memory provider with per-resource replies, delays and call counters.
pub struct ScriptedFetcher {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
        })
    }

    /// Fetcher serving [`artists`], [`locations`], [`dates`] and [`relations`].
    pub fn with_catalog() -> Arc<Self> {
        let fetcher = Self::new();
        fetcher.set_json(Resource::Artists, &artists());
        fetcher.set_json(Resource::Locations, &json!({ "index": locations() }));
        fetcher.set_json(Resource::Dates, &json!({ "index": dates() }));
        fetcher.set_json(Resource::Relations, &json!({ "index": relations() }));
        fetcher
    }

    pub fn set_body(&self, resource: Resource, body: &[u8]) {
        self.replies
            .lock()
            .unwrap()
            .insert(locator(resource), Reply::Body(body.to_vec()));
    }

    /// Serves `body` at an arbitrary locator.
    pub fn serve_at(&self, locator: &str, body: &[u8]) {
        self.replies
            .lock()
            .unwrap()
            .insert(locator.to_string(), Reply::Body(body.to_vec()));
    }

    pub fn calls_to(&self, locator: &str) -> usize {
        *self.calls.lock().unwrap().get(locator).unwrap_or(&0)
    }

    pub fn set_json<T: Serialize>(&self, resource: Resource, value: &T) {
        let body = serde_json::to_vec(value).unwrap();
        self.set_body(resource, &body);
    }

    pub fn fail(&self, resource: Resource, kind: TransportKind) {
        self.replies
            .lock()
            .unwrap()
            .insert(locator(resource), Reply::Fail(kind));
    }

    pub fn delay(&self, resource: Resource, delay: Duration) {
        self.delays.lock().unwrap().insert(locator(resource), delay);
    }

    pub fn delay_all(&self, delay: Duration) {
        for resource in Resource::ALL {
            self.delay(resource, delay);
        }
    }

    pub fn calls(&self, resource: Resource) -> usize {
        self.calls_to(&locator(resource))
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, TransportError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(locator.to_string())
            .or_insert(0) += 1;

        let delay = self.delays.lock().unwrap().get(locator).copied();
        if let Some(delay) = delay {
            sleep(delay).await;
        }

        match self.replies.lock().unwrap().get(locator) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Fail(TransportKind::Timeout)) => {
                Err(TransportError::timeout(locator, "scripted timeout"))
            }
            Some(Reply::Fail(TransportKind::RemoteFailure)) => {
                Err(TransportError::remote(locator, "500 Internal Server Error"))
            }
            None => Err(TransportError::remote(locator, "404 Not Found")),
        }
    }
}

pub fn locator(resource: Resource) -> String {
    ProviderConfig::from_base_url(BASE_URL)
        .locator(resource)
        .to_string()
}

pub fn provider(fetcher: &Arc<ScriptedFetcher>) -> Provider {
    provider_with_timeout(fetcher, Duration::from_secs(5))
}

pub fn provider_with_timeout(fetcher: &Arc<ScriptedFetcher>, timeout: Duration) -> Provider {
    Provider::new(
        fetcher.clone(),
        ProviderConfig::from_base_url(BASE_URL).with_request_timeout(timeout),
    )
}

/// Waits until no refresh is in flight.
pub async fn wait_for_refresh(cache: &CatalogCache) {
    for _ in 0..300 {
        if !cache.is_refreshing() {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("refresh still running after 3s");
}

pub fn queen() -> Artist {
    Artist {
        id: 1,
        name: "Queen".to_string(),
        image: "https://groupietrackers.herokuapp.com/api/images/queen.jpeg".to_string(),
        creation_date: 1970,
        first_album: "14-12-1973".to_string(),
        members: vec![
            "Freddie Mercury".to_string(),
            "Brian May".to_string(),
            "John Daecon".to_string(),
            "Roger Meddows-Taylor".to_string(),
        ],
        locations: "https://groupietrackers.herokuapp.com/api/locations/1".to_string(),
        concert_dates: "https://groupietrackers.herokuapp.com/api/dates/1".to_string(),
        relations: "https://groupietrackers.herokuapp.com/api/relation/1".to_string(),
    }
}

pub fn beatles() -> Artist {
    Artist {
        id: 2,
        name: "Beatles".to_string(),
        image: "https://groupietrackers.herokuapp.com/api/images/beatles.jpeg".to_string(),
        creation_date: 1957,
        first_album: "05-10-1962".to_string(),
        members: vec![
            "John Lennon".to_string(),
            "Paul McCartney".to_string(),
            "George Harrison".to_string(),
            "Ringo Starr".to_string(),
        ],
        locations: "https://groupietrackers.herokuapp.com/api/locations/2".to_string(),
        concert_dates: "https://groupietrackers.herokuapp.com/api/dates/2".to_string(),
        relations: "https://groupietrackers.herokuapp.com/api/relation/2".to_string(),
    }
}

pub fn artists() -> Vec<Artist> {
    vec![queen(), beatles()]
}

pub fn locations() -> Vec<Location> {
    vec![
        Location {
            id: 1,
            locations: vec!["north_carolina-usa".to_string(), "osaka-japan".to_string()],
            dates: "https://groupietrackers.herokuapp.com/api/dates/1".to_string(),
        },
        Location {
            id: 2,
            locations: vec!["liverpool-uk".to_string(), "osaka-japan".to_string()],
            dates: "https://groupietrackers.herokuapp.com/api/dates/2".to_string(),
        },
    ]
}

pub fn dates() -> Vec<ConcertDate> {
    vec![
        ConcertDate {
            id: 1,
            dates: vec!["*23-08-2019".to_string(), "28-01-2020".to_string()],
        },
        ConcertDate {
            id: 2,
            dates: vec!["*05-12-1963".to_string(), "29-06-1966".to_string()],
        },
    ]
}

pub fn relations() -> Vec<Relation> {
    let mut queen = BTreeMap::new();
    queen.insert("north_carolina-usa".to_string(), vec!["23-08-2019".to_string()]);
    queen.insert("osaka-japan".to_string(), vec!["28-01-2020".to_string()]);

    let mut beatles = BTreeMap::new();
    beatles.insert("liverpool-uk".to_string(), vec!["05-12-1963".to_string()]);
    beatles.insert("osaka-japan".to_string(), vec!["29-06-1966".to_string()]);

    vec![
        Relation {
            id: 1,
            dates_locations: queen,
        },
        Relation {
            id: 2,
            dates_locations: beatles,
        },
    ]
}

pub fn snapshot() -> Snapshot {
    Snapshot::new(artists(), locations(), dates(), relations(), 1)
}
