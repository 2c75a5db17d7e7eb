use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{RepositoryError, Shift, ShiftRepository, ShiftsPage};

/// Substitutable data source with a fixed dataset, used by the demo
/// wiring and by workflow tests. Responses can be scripted per call;
/// once the script runs out, the sample dataset is served.
pub struct StaticShiftRepository {
    responses: Mutex<VecDeque<Result<ShiftsPage, RepositoryError>>>,
    calls: AtomicUsize,
}

impl StaticShiftRepository {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queues a response for the next call ahead of the default dataset.
    pub fn push_response(
        &self,
        response: Result<ShiftsPage, RepositoryError>,
    ) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn times_called(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StaticShiftRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ShiftRepository for StaticShiftRepository {
    async fn get_shifts_by_location(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<ShiftsPage, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(ShiftsPage {
                data: sample_shifts(),
                status: 200,
            }),
        }
    }
}

/// The built-in dataset: two shifts near Krasnodar.
pub fn sample_shifts() -> Vec<Shift> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "70aa3063-5230-4205-be84-bc77d22c0973",
            "logo": "https://hwfiles.storage.yandexcloud.net/media/3518381/conversions/energo-logo-list.jpg",
            "coordinates": { "longitude": 38.916033, "latitude": 45.10303 },
            "address": "западный обход 69",
            "companyName": "ООО «СтройСнабЭнерго»",
            "dateStartByCity": "15.09.2025",
            "timeStartByCity": "08:00",
            "timeEndByCity": "17:00",
            "currentWorkers": 2,
            "planWorkers": 2,
            "workTypes": [{
                "id": 122,
                "name": "Подсобные работы",
                "nameGt5": "Подсобников",
                "nameLt5": "Подсобника",
                "nameOne": "Подсобник"
            }],
            "priceWorker": 3448,
            "bonusPriceWorker": 0,
            "customerFeedbacksCount": "53 отзыва",
            "customerRating": 4.5,
            "isPromotionEnabled": false
        },
        {
            "id": "87474322-e143-4378-93a4-1ea6443df80b",
            "logo": "https://hwfiles.storage.yandexcloud.net/media/4206404/conversions/Maksimov-logo-list.jpg",
            "coordinates": { "longitude": 38.916016211639, "latitude": 45.103057662949 },
            "address": "Краснодар, улица Западный Обход, 69",
            "companyName": "ДОГМА",
            "dateStartByCity": "15.09.2025",
            "timeStartByCity": "08:00",
            "timeEndByCity": "18:00",
            "currentWorkers": 2,
            "planWorkers": 3,
            "workTypes": [{
                "id": 8001,
                "name": "Услуги разнорабочего",
                "nameGt5": "Разнорабочих",
                "nameLt5": "Разнорабочего",
                "nameOne": "Разнорабочий"
            }],
            "priceWorker": 2500,
            "bonusPriceWorker": 0,
            "customerFeedbacksCount": "28 отзывов",
            "customerRating": 4.5,
            "isPromotionEnabled": true
        }
    ]))
    .expect("Static dataset is valid")
}
