//! Estadísticas derivadas para el dashboard
//!
//! Funciones puras sobre las listas en memoria; se recalculan en cada
//! petición.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::analytics::{
    CodeCount, DashboardSummary, QuoteRequestSummary, QuoteSummary, ServiceSummary,
    StatusBreakdownItem, StatusTotal, UpcomingDelivery,
};
use crate::models::quote::{Quote, QuoteStatus};
use crate::models::quote_request::{QuoteRequest, QuoteRequestStatus, Urgency};
use crate::models::service::{PhotoKind, Service, ServiceStatus};
use crate::models::status::{HasStatus, StatusDisplay, OVERDUE_COLOR, OVERDUE_LABEL};
use crate::models::vehicle::Vehicle;
use crate::utils::dates::BrDate;

lazy_static! {
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]").unwrap();
    static ref NON_ALNUM_SPACE_RE: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Cantidad de servicios que muestra "serviços recentes"
pub const RECENT_SERVICES_LIMIT: usize = 5;

/// Número de entidades con el estado dado
pub fn count_by_status<E: HasStatus>(entities: &[E], status: E::Status) -> usize {
    entities.iter().filter(|e| e.status() == status).count()
}

/// `round(100 * count / total)` con redondeo half-up; 0 si no hay total
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let count = count as u64;
    let total = total as u64;
    ((200 * count + total) / (2 * total)) as u32
}

/// Un servicio está atrasado si no está concluido y su entrega prevista
/// ya pasó
pub fn is_overdue(service: &Service, today: BrDate) -> bool {
    service.status != ServiceStatus::Completed
        && service
            .expected_delivery
            .map(|expected| expected < today)
            .unwrap_or(false)
}

/// Resumen de servicios con el desglose para el gráfico
pub fn service_summary(services: &[Service], today: BrDate) -> ServiceSummary {
    let total = services.len();
    let completed = count_by_status(services, ServiceStatus::Completed);
    let in_progress = count_by_status(services, ServiceStatus::InProgress);
    let awaiting_parts = count_by_status(services, ServiceStatus::AwaitingParts);
    let pending = count_by_status(services, ServiceStatus::Pending);
    let overdue = services.iter().filter(|s| is_overdue(s, today)).count();

    let mut breakdown: Vec<StatusBreakdownItem> = [
        (ServiceStatus::Completed, completed),
        (ServiceStatus::InProgress, in_progress),
        (ServiceStatus::AwaitingParts, awaiting_parts),
        (ServiceStatus::Pending, pending),
    ]
    .iter()
    .map(|(status, count)| StatusBreakdownItem {
        code: status.code().to_string(),
        label: status.label().to_string(),
        color: status.color().to_string(),
        count: *count,
        percentage: percentage(*count, total),
    })
    .collect();

    breakdown.push(StatusBreakdownItem {
        code: "overdue".to_string(),
        label: OVERDUE_LABEL.to_string(),
        color: OVERDUE_COLOR.to_string(),
        count: overdue,
        percentage: percentage(overdue, total),
    });

    ServiceSummary {
        total,
        pending,
        in_progress,
        awaiting_parts,
        completed,
        overdue,
        completed_percentage: percentage(completed, total),
        overdue_percentage: percentage(overdue, total),
        breakdown,
    }
}

/// Entregas previstas de servicios no concluidos, de la más próxima a la
/// más lejana
pub fn upcoming_deliveries(services: &[Service], today: BrDate) -> Vec<UpcomingDelivery> {
    let mut deliveries: Vec<UpcomingDelivery> = services
        .iter()
        .filter(|s| s.status != ServiceStatus::Completed)
        .filter_map(|s| {
            s.expected_delivery.map(|expected| UpcomingDelivery {
                order_ref: s.order_ref.clone(),
                vehicle: s.vehicle.clone(),
                plate: s.plate.clone(),
                expected_delivery: expected,
                overdue: is_overdue(s, today),
            })
        })
        .collect();
    deliveries.sort_by_key(|d| d.expected_delivery);
    deliveries
}

/// Últimos `limit` servicios por fecha de entrada (más reciente primero)
pub fn recent_services(services: &[Service], limit: usize) -> Vec<Service> {
    let mut sorted = services.to_vec();
    sorted.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
    sorted.truncate(limit);
    sorted
}

/// Conteo y suma de totales por estado
pub fn quote_summary(quotes: &[Quote]) -> QuoteSummary {
    let by_status = QuoteStatus::all()
        .iter()
        .map(|status| {
            let matching = quotes.iter().filter(|q| q.status == *status);
            let (count, total_value) = matching.fold((0usize, Decimal::ZERO), |(n, sum), q| {
                (n + 1, sum.saturating_add(q.total))
            });
            StatusTotal {
                code: status.code().to_string(),
                label: status.label().to_string(),
                count,
                total_value,
            }
        })
        .collect();

    QuoteSummary {
        total: quotes.len(),
        by_status,
    }
}

/// Conteo de solicitudes por estado y por urgencia
pub fn quote_request_summary(requests: &[QuoteRequest]) -> QuoteRequestSummary {
    let by_status = QuoteRequestStatus::all()
        .iter()
        .map(|status| CodeCount {
            code: status.code().to_string(),
            label: status.label().to_string(),
            count: count_by_status(requests, *status),
        })
        .collect();

    let by_urgency = Urgency::all()
        .iter()
        .map(|urgency| CodeCount {
            code: urgency.code().to_string(),
            label: urgency.label().to_string(),
            count: requests.iter().filter(|r| r.urgency == *urgency).count(),
        })
        .collect();

    QuoteRequestSummary {
        total: requests.len(),
        by_status,
        by_urgency,
    }
}

/// Resumen completo del dashboard
pub fn dashboard_summary(
    vehicles: &[Vehicle],
    quotes: &[Quote],
    requests: &[QuoteRequest],
    today: BrDate,
) -> DashboardSummary {
    let services: Vec<Service> = vehicles
        .iter()
        .flat_map(|v| v.services.iter().cloned())
        .collect();

    DashboardSummary {
        date: today,
        vehicles: vehicles.len(),
        services: service_summary(&services, today),
        upcoming_deliveries: upcoming_deliveries(&services, today),
        quotes: quote_summary(quotes),
        quote_requests: quote_request_summary(requests),
    }
}

/// Slug legible del servicio:
/// `<placa>-<estado>-<N>antes-<M>depois-<descripción>`
pub fn service_slug(service: &Service) -> String {
    let plate = NON_ALNUM_RE
        .replace_all(&service.plate.to_lowercase(), "-")
        .into_owned();
    let status = service.status.code().replace('_', "-");

    let description = service.description.to_lowercase();
    let description = NON_ALNUM_SPACE_RE.replace_all(&description, "");
    let description: String = WHITESPACE_RE
        .replace_all(&description, "-")
        .chars()
        .take(50)
        .collect();

    format!(
        "{}-{}-{}antes-{}depois-{}",
        plate,
        status,
        service.photo_count(PhotoKind::Before),
        service.photo_count(PhotoKind::After),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::{Photo, Priority};
    use crate::utils::dates::BrDateTime;

    fn date(s: &str) -> BrDate {
        s.parse().unwrap()
    }

    fn service(order_ref: &str, status: ServiceStatus, expected: Option<&str>) -> Service {
        Service {
            order_ref: order_ref.to_string(),
            vehicle: "Fiat Uno".to_string(),
            plate: "XYZ-5678".to_string(),
            description: "Revisão completa".to_string(),
            entry_date: date("15/09/2023"),
            exit_date: None,
            expected_delivery: expected.map(date),
            status,
            priority: Priority::Medium,
            value: None,
            notes: None,
            photos: vec![],
        }
    }

    #[test]
    fn test_percentage_without_total_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(4, 4), 100);
    }

    #[test]
    fn test_count_by_status() {
        let services = vec![
            service("1", ServiceStatus::Completed, None),
            service("2", ServiceStatus::Completed, None),
            service("3", ServiceStatus::Pending, None),
        ];
        assert_eq!(count_by_status(&services, ServiceStatus::Completed), 2);
        assert_eq!(count_by_status(&services, ServiceStatus::AwaitingParts), 0);
    }

    #[test]
    fn test_is_overdue() {
        let today = date("01/06/2023");
        let running = service("1", ServiceStatus::InProgress, Some("01/01/2023"));
        assert!(is_overdue(&running, today));

        let done = service("1", ServiceStatus::Completed, Some("01/01/2023"));
        assert!(!is_overdue(&done, today));

        let no_forecast = service("1", ServiceStatus::InProgress, None);
        assert!(!is_overdue(&no_forecast, today));

        let due_today = service("1", ServiceStatus::Pending, Some("01/06/2023"));
        assert!(!is_overdue(&due_today, today));
    }

    #[test]
    fn test_service_summary() {
        let services = vec![
            service("1", ServiceStatus::Completed, Some("12/09/2023")),
            service("2", ServiceStatus::InProgress, Some("01/01/2023")),
            service("3", ServiceStatus::AwaitingParts, None),
            service("4", ServiceStatus::Pending, Some("30/12/2030")),
        ];
        let summary = service_summary(&services, date("01/06/2024"));

        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.completed_percentage, 25);
        assert_eq!(summary.overdue_percentage, 25);
        assert_eq!(summary.breakdown.len(), 5);
        assert_eq!(summary.breakdown[0].code, "completed");
        assert_eq!(summary.breakdown[4].label, OVERDUE_LABEL);
    }

    #[test]
    fn test_empty_summary_has_zero_percentages() {
        let summary = service_summary(&[], date("01/06/2024"));
        assert_eq!(summary.completed_percentage, 0);
        assert!(summary.breakdown.iter().all(|b| b.percentage == 0));
    }

    #[test]
    fn test_upcoming_deliveries_sorted_and_skip_completed() {
        let services = vec![
            service("late", ServiceStatus::Pending, Some("20/12/2023")),
            service("done", ServiceStatus::Completed, Some("01/01/2023")),
            service("early", ServiceStatus::InProgress, Some("02/02/2023")),
            service("none", ServiceStatus::InProgress, None),
        ];
        let upcoming = upcoming_deliveries(&services, date("01/06/2023"));
        let refs: Vec<_> = upcoming.iter().map(|d| d.order_ref.as_str()).collect();
        assert_eq!(refs, vec!["early", "late"]);
        assert!(upcoming[0].overdue);
        assert!(!upcoming[1].overdue);
    }

    #[test]
    fn test_recent_services_newest_first() {
        let mut a = service("a", ServiceStatus::Pending, None);
        a.entry_date = date("10/09/2023");
        let mut b = service("b", ServiceStatus::Pending, None);
        b.entry_date = date("22/09/2023");
        let mut c = service("c", ServiceStatus::Pending, None);
        c.entry_date = date("15/09/2023");

        let recent = recent_services(&[a, b, c], 2);
        let refs: Vec<_> = recent.iter().map(|s| s.order_ref.as_str()).collect();
        assert_eq!(refs, vec!["b", "c"]);
    }

    #[test]
    fn test_service_slug() {
        let mut s = service("1", ServiceStatus::InProgress, None);
        s.description = "Troca de correia (dentada)!".to_string();
        s.photos = vec![
            Photo {
                id: "p1".to_string(),
                url: "/service-photos/xyz5678-antes-1.jpg".to_string(),
                kind: PhotoKind::Before,
                description: "Antes".to_string(),
                taken_at: "15/09/2023 09:15".parse::<BrDateTime>().unwrap(),
            },
        ];
        assert_eq!(
            service_slug(&s),
            "xyz-5678-in-progress-1antes-0depois-troca-de-correia-dentada"
        );
    }
}
