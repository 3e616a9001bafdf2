use std::sync::Arc;

use chrono::{Local, TimeZone};
use colored::Colorize;
use domain_business::model::vo::Credentials;
use domain_notification::model::entity::Notification;
use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{cli::Command, infrastructure::service_provider::ServiceProvider, server};

pub async fn dispatch(command: Command, provider: Arc<ServiceProvider>) -> anyhow::Result<()> {
    match command {
        Command::Run => server::run(provider).await,
        Command::Sync => server::sync(provider).await,
        Command::Login { username, password } => login(&provider, username, password).await,
        Command::Logout => {
            provider.auth().logout().await?;
            println!("Déconnecté.");
            Ok(())
        }
        Command::List { unread } => {
            let notifications = if unread {
                provider.store.get_unread().await?
            } else {
                provider.store.get_all().await?
            };
            print_list(&notifications);
            Ok(())
        }
        Command::Watch => watch(&provider).await,
        Command::Count => {
            println!("{}", provider.notifications.unread_count_hybrid().await?);
            Ok(())
        }
        Command::Read { id } => {
            if let Err(e) = provider.notifications.mark_as_read_remote(&id).await {
                tracing::warn!("Remote mark as read failed, marking locally: {e}");
                provider.notifications.mark_as_read(&id).await?;
            }
            Ok(())
        }
        Command::ReadAll => {
            if let Err(e) = provider.notifications.mark_all_as_read_remote().await {
                tracing::warn!("Remote mark all as read failed, marking locally: {e}");
                provider.notifications.mark_all_as_read().await?;
            }
            Ok(())
        }
        Command::Delete { id } => {
            if let Err(e) = provider.notifications.delete_remote(&id).await {
                tracing::warn!("Remote delete failed, deleting locally: {e}");
                provider.notifications.delete(&id).await?;
            }
            Ok(())
        }
        Command::Clear => provider.notifications.delete_all().await,
        Command::Purge { days } => {
            let days = days.unwrap_or(provider.config.storage.retention_days);
            let deleted = provider.notifications.clean_old(days).await?;
            println!("{deleted} notification(s) supprimée(s)");
            Ok(())
        }
        Command::Stats => {
            let stats = provider
                .dashboard()
                .stats()
                .await
                .map_err(|e| e.into_service("Erreur lors du chargement du tableau de bord"))?;
            println!("Commandes: {} ({} en cours)", stats.commandes_total, stats.commandes_en_cours);
            println!("Production mensuelle: {:.1} m³", stats.production_mensuelle);
            println!("Chiffre d'affaires mensuel: {:.2}", stats.chiffre_affaires_mensuel);
            println!("Stock critique: {}", stats.stock_critique);
            println!(
                "Carburant mensuel: {:.1} L",
                stats.consommation_carburant_mensuelle
            );
            Ok(())
        }
    }
}

async fn login(
    provider: &ServiceProvider,
    username: String,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => {
            println!("Mot de passe:");
            let mut line = String::new();
            BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    let user = provider
        .auth()
        .login(&Credentials { username, password })
        .await
        .map_err(|e| e.into_service("Échec de la connexion"))?;
    println!("Connecté en tant que {}", user.display_name().bold());
    Ok(())
}

async fn watch(provider: &ServiceProvider) -> anyhow::Result<()> {
    let mut updates = provider.notifications.observe_hybrid().await;
    loop {
        tokio::select! {
            update = updates.next() => match update {
                Some(notifications) => print_list(&notifications?),
                None => return Ok(()),
            },
            interrupted = tokio::signal::ctrl_c() => return Ok(interrupted?),
        }
    }
}

fn print_list(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("Aucune notification");
        return;
    }
    for notification in notifications {
        let line = format_line(notification);
        if notification.is_read {
            println!("{line}");
        } else {
            println!("{}", line.bold());
        }
    }
}

fn format_line(notification: &Notification) -> String {
    let when = Local
        .timestamp_millis_opt(notification.timestamp)
        .single()
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default();
    format!(
        "{} {when} [{}] {}: {} ({})",
        if notification.is_read { " " } else { "*" },
        notification.category,
        notification.title,
        notification.message,
        notification.id
    )
}
