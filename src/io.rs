use crate::model::{GuardList, GuardPost, GuardPostId, SoldierId, Team, TeamId};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'équipes depuis CSV: header `id,name,members,guard_posts`
/// (listes séparées par `;`)
pub fn import_teams_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Team>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid team row (empty)");
        }
        let members = split_list(rec.get(2).unwrap_or(""))
            .map(SoldierId::new)
            .collect();
        let eligible_posts = split_list(rec.get(3).unwrap_or(""))
            .map(GuardPostId::new)
            .collect();
        out.push(Team {
            id: TeamId::new(id),
            name: name.to_string(),
            members,
            eligible_posts,
        });
    }
    Ok(out)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Import de postes depuis un tableau JSON.
pub fn import_guard_posts_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GuardPost>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let posts: Vec<GuardPost> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing guard posts {}", path.display()))?;
    Ok(posts)
}

/// Export JSON des listes de garde (jolie mise en forme)
pub fn export_guard_lists_json<P: AsRef<Path>>(path: P, lists: &[GuardList]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(lists)?;
    fs::write(path, s)?;
    Ok(())
}

/// Relit un aperçu exporté par [`export_guard_lists_json`].
pub fn load_guard_lists_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GuardList>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let lists = serde_json::from_slice(&data)
        .with_context(|| format!("parsing guard lists {}", path.display()))?;
    Ok(lists)
}

/// Export CSV des tours:
/// header `guard_post_id,guard_post,date,period,duration,team,soldiers,error`
pub fn export_guard_lists_csv<P: AsRef<Path>>(path: P, lists: &[GuardList]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "guard_post_id",
        "guard_post",
        "date",
        "period",
        "duration",
        "team",
        "soldiers",
        "error",
    ])?;
    for gl in lists {
        for s in &gl.shifts {
            let soldiers = s
                .soldiers
                .iter()
                .map(SoldierId::as_str)
                .collect::<Vec<_>>()
                .join(";");
            let date = s.guard_time.date.to_string();
            let period = s.guard_time.period.to_string();
            let duration = s.duration.to_string();
            w.write_record([
                gl.guard_post_id.as_str(),
                gl.guard_post_display_name.as_str(),
                date.as_str(),
                period.as_str(),
                duration.as_str(),
                s.team.as_ref().map(TeamId::as_str).unwrap_or(""),
                soldiers.as_str(),
                s.error.as_deref().unwrap_or(""),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Rendu texte compact, une ligne par tour.
pub fn render_guard_lists(lists: &[GuardList]) -> String {
    let mut out = String::new();
    for gl in lists {
        out.push_str(&format!("[{}] {}\n", gl.guard_post_id, gl.guard_post_display_name));
        for s in &gl.shifts {
            let who = if s.soldiers.is_empty() {
                "-".to_string()
            } else {
                s.soldiers
                    .iter()
                    .map(SoldierId::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            };
            out.push_str(&format!("  {} +{} | {}", s.guard_time, s.duration, who));
            if let Some(team) = &s.team {
                out.push_str(&format!(" ({team})"));
            }
            if let Some(err) = &s.error {
                out.push_str(&format!(" ! {err}"));
            }
            out.push('\n');
        }
    }
    out
}
