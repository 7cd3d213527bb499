use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::advisory::Advisory;
use crate::core::{codec, parse, resolver};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::calendar::CalendarConfig;
use crate::models::window::TimeWindow;
use crate::models::world::World;
use crate::ui::messages::advisory;
use crate::utils::span2readable;

/// CLI intent for a window resolution, shared by `window` and `list`.
pub struct WindowRequest<'a> {
    pub last: &'a Option<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub unlimited: bool,
    pub clamp_selection: bool,
    pub min_span: Option<i64>,
}

/// Resolve a TimeWindow for a world from CLI intent.
///
/// A relative window (`--last`) is anchored at the world's recorded maximum
/// event time. A world without any calendar uses the fallback calendar
/// anchored at wall-clock "now", the only place the two clocks may meet. A
/// world WITH a calendar but no recorded events cannot anchor a relative
/// window and fails explicitly instead of guessing.
pub fn resolve_window(
    pool: &mut DbPool,
    world: &World,
    req: &WindowRequest,
    cfg: &Config,
) -> AppResult<(TimeWindow, Vec<Advisory>)> {
    if req.unlimited {
        return Ok((resolver::unlimited(), Vec::new()));
    }

    let mut start = req.from;
    let mut end = req.to;

    if let Some(expr) = req.last {
        let (value, unit) = parse::parse_last_expr(expr)?;

        let (cal, reference) = match world.calendar()? {
            Some(cal) => match cal.known_max_seconds {
                Some(max) => (cal, resolver::Reference::WorldMax(max)),
                None => return Err(AppError::NoReferencePoint(world.name.clone())),
            },
            None => (
                CalendarConfig::fallback(),
                resolver::Reference::WallClockFallback,
            ),
        };

        let reference = reference.resolve();
        start = Some(resolver::last_n_units(&cal, reference, value, unit));
        end = Some(end.unwrap_or(reference));
    }

    let mut advisories = Vec::new();

    if req.clamp_selection
        && let Some((sel_min, sel_max)) = queries::selection_bounds(pool, world.id)?
    {
        if let Some(s) = start {
            let (clamped, adv) = resolver::clamp_start_against_selection(s, sel_min);
            start = Some(clamped);
            advisories.extend(adv);
        }
        if let Some(e) = end {
            let (clamped, adv) = resolver::clamp_end_against_selection(e, sel_max);
            end = Some(clamped);
            advisories.extend(adv);
        }
    }

    let minimum = req.min_span.unwrap_or(cfg.minimum_span_seconds);
    let window = resolver::enforce_minimum_span(TimeWindow::new(start, end), minimum);

    Ok((window, advisories))
}

/// Handle the `window` command: resolve and print a query window without
/// listing the events inside it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Window {
        world,
        last,
        from,
        to,
        unlimited,
        clamp_selection,
        min_span,
    } = cmd
    {
        let name = super::resolve_world_arg(world, cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let w = queries::get_world_by_name(&mut pool, &name)?;

        let req = WindowRequest {
            last,
            from: *from,
            to: *to,
            unlimited: *unlimited,
            clamp_selection: *clamp_selection,
            min_span: *min_span,
        };

        let (window, advisories) = resolve_window(&mut pool, &w, &req, cfg)?;

        for adv in &advisories {
            advisory(adv);
        }

        if window.is_unbounded() {
            println!("Window: unlimited");
            return Ok(());
        }

        let fmt_bound = |b: Option<i64>| b.map(|v| v.to_string()).unwrap_or_else(|| "*".into());
        println!(
            "Window: [{} .. {}]",
            fmt_bound(window.start),
            fmt_bound(window.end)
        );

        if let Some(cal) = w.calendar()? {
            if let Some(s) = window.start {
                println!("  start: {}", codec::format_instant(s, &cal));
            }
            if let Some(e) = window.end {
                println!("  end:   {}", codec::format_instant(e, &cal));
            }
            if let (Some(s), Some(e)) = (window.start, window.end) {
                println!("  span:  {}", span2readable(e - s, &cal));
            }
        }
    }
    Ok(())
}
