use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use domain_business::{
    exception::ApiException,
    mock::{MockOrderRepo, MockProductionRepo, MockStockRepo},
    model::{
        entity::{Commande, MatierePremiere, OrdreProduction},
        vo::Page,
    },
    service::{InventoryService, OrderService, ProductionService},
};
use service_business::{InventoryServiceImpl, OrderServiceImpl, ProductionServiceImpl};

fn order(id: i64, date_livraison_prevue: Option<&str>, delivery_notified: bool) -> Commande {
    Commande {
        id,
        client_id: 1,
        chantier_id: None,
        date_commande: "2024-05-02".to_string(),
        date_livraison_souhaitee: "2024-05-04".to_string(),
        statut: "en_attente".to_string(),
        client_nom: Some("Béton Léger".to_string()),
        numero: Some(format!("CMD-{id}")),
        date_livraison_prevue: date_livraison_prevue.map(str::to_string),
        delivery_notified,
        lignes: None,
    }
}

fn production(id: i64, date_production: &str, statut: &str) -> OrdreProduction {
    OrdreProduction {
        id,
        numero_bon: None,
        commande_id: 1,
        formule_id: 1,
        quantite_produire: 8.0,
        date_production: date_production.to_string(),
        heure_production: None,
        statut: statut.to_string(),
        matieres_sorties_calculees: false,
    }
}

fn material(id: i64, stock_actuel: f64, stock_minimum: f64) -> MatierePremiere {
    MatierePremiere {
        id,
        nom: format!("Matière {id}"),
        unite: "t".to_string(),
        stock_actuel,
        stock_minimum,
        statut_stock: "normal".to_string(),
        prix_unitaire: 10.0,
    }
}

fn single_page<T>(results: Vec<T>) -> Page<T> {
    Page {
        count: results.len() as u64,
        next: None,
        previous: None,
        results,
    }
}

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn recent_orders_query_yesterday_to_today() {
    let mut repo = MockOrderRepo::new();
    repo.expect_list()
        .withf(|query| {
            query.filters
                == vec![
                    ("date_commande_after".to_string(), "2024-05-01".to_string()),
                    ("date_commande_before".to_string(), "2024-05-02".to_string()),
                ]
        })
        .times(1)
        .returning(|_| Ok(single_page(vec![order(1, None, false)])));
    let service = OrderServiceImpl::builder().order_repo(Arc::new(repo)).build();

    let orders = service.recent_orders(day("2024-05-02")).await.unwrap();
    assert_eq!(1, orders.len());
}

#[tokio::test]
async fn deliveries_follow_every_page() {
    let mut repo = MockOrderRepo::new();
    repo.expect_list().times(2).returning(|query| {
        if query.page == Some(1) {
            Ok(Page {
                count: 3,
                next: Some("http://host/api/commandes/?page=2".to_string()),
                previous: None,
                results: vec![
                    order(1, Some("2024-05-02T08:00:00"), false),
                    order(2, Some("2024-05-03T08:00:00"), false),
                ],
            })
        } else {
            Ok(single_page(vec![order(3, Some("2024-05-02"), true)]))
        }
    });
    let service = OrderServiceImpl::builder().order_repo(Arc::new(repo)).build();

    let deliveries = service.deliveries_on(day("2024-05-02")).await.unwrap();
    assert_eq!(vec![1, 3], deliveries.iter().map(|o| o.id).collect::<Vec<_>>());
}

#[tokio::test]
async fn order_errors_are_rewrapped() {
    let mut repo = MockOrderRepo::new();
    repo.expect_list().returning(|_| {
        Err(ApiException::Status {
            code: 503,
            message: "Service Unavailable".to_string(),
        })
    });
    let service = OrderServiceImpl::builder().order_repo(Arc::new(repo)).build();

    let e = service.recent_orders(day("2024-05-02")).await.unwrap_err();
    assert_eq!(
        "Erreur lors du chargement des commandes: Service Unavailable (HTTP 503)",
        e.to_string()
    );
}

#[tokio::test]
async fn recent_production_window_crosses_midnight() {
    let mut repo = MockProductionRepo::new();
    repo.expect_list().returning(|_| {
        Ok(single_page(vec![
            production(1, "2024-05-01", "PRET"),
            production(2, "2024-05-02", "en_cours"),
            production(3, "2024-04-30", "PRET"),
            production(4, "not a date", "PRET"),
        ]))
    });
    let service = ProductionServiceImpl::builder()
        .production_repo(Arc::new(repo))
        .build();

    // 01:00 minus two hours is still the day before.
    let now = NaiveDateTime::parse_from_str("2024-05-02 01:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    let recent = service.recent_updates(now).await.unwrap();
    assert_eq!(vec![1, 2], recent.iter().map(|p| p.id).collect::<Vec<_>>());
}

#[tokio::test]
async fn low_stock_needs_positive_threshold() {
    let mut repo = MockStockRepo::new();
    repo.expect_list().returning(|_| {
        Ok(single_page(vec![
            material(1, 5.0, 10.0),
            material(2, 10.0, 10.0),
            material(3, 20.0, 10.0),
            material(4, 0.0, 0.0),
        ]))
    });
    let service = InventoryServiceImpl::builder().stock_repo(Arc::new(repo)).build();

    let low = service.low_stock_items().await.unwrap();
    assert_eq!(vec![1, 2], low.iter().map(|m| m.id).collect::<Vec<_>>());
}

#[tokio::test]
async fn stock_errors_are_rewrapped() {
    let mut repo = MockStockRepo::new();
    repo.expect_list()
        .returning(|_| Err(ApiException::Transport("connection refused".to_string())));
    let service = InventoryServiceImpl::builder().stock_repo(Arc::new(repo)).build();

    let e = service.low_stock_items().await.unwrap_err();
    assert_eq!(
        "Erreur lors du chargement du stock: erreur réseau (connection refused)",
        e.to_string()
    );
}
