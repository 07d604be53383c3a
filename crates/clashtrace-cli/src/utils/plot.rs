use clashtrace::core::models::clash::ClashCategory;
use clashtrace::core::models::frame::Frame;
use clashtrace::core::models::transition::Transition;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options controlling gnuplot data and script emission.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Prefix for the plot data files; the section name is appended to it.
    pub prefix: PathBuf,
    /// Collisions whose distance never exceeds this value go into separate
    /// "(low)" plots.
    pub min_threshold: f64,
    /// Maximum number of collisions per chunked plot.
    pub max_per_plot: usize,
    /// The followed RMSD range, for out-of-range marker arrows.
    pub rmsd_min: f64,
    pub rmsd_max: Option<f64>,
}

struct PlotSection<'a> {
    transitions: Vec<&'a Transition>,
    name: &'static str,
    title: &'static str,
}

/// Writes per-category gnuplot data files plus executable shell scripts that
/// render them, mirroring the layout of the transition report: an "all" plot
/// and, per category, separate plots for collisions that do and do not clear
/// the low-distance threshold.
pub fn write_plots(
    transitions: &[Transition],
    frames: &[Frame],
    options: &PlotOptions,
) -> io::Result<()> {
    if transitions.is_empty() || frames.is_empty() {
        return Ok(());
    }

    let sections = build_sections(transitions, options.min_threshold);
    let max_distance = rounded_max_distance(transitions);

    for section in &sections {
        let data_path = data_file_path(&options.prefix, section.name);
        write_data_file(&data_path, &section.transitions)?;

        // The combined section is never chunked.
        let chunk_size = if section.name.is_empty() {
            section.transitions.len()
        } else {
            options.max_per_plot.max(1)
        };

        let mut column_offset = 0usize;
        for (index, chunk) in section.transitions.chunks(chunk_size).enumerate() {
            let script_path = PathBuf::from(format!("gnuplot{}_{}.sh", section.name, index));
            write_script(
                &script_path,
                &data_path,
                section,
                chunk.len(),
                index,
                column_offset,
                max_distance,
                frames,
                options,
            )?;
            mark_executable(&script_path)?;
            column_offset += chunk.len();
        }
        info!(section = section.name, file = %data_path.display(), "Wrote plot section.");
    }

    Ok(())
}

/// Splits the report-ordered transitions into the "all" section plus, per
/// category, high and low subsections ordered by descending maximal distance.
fn build_sections(transitions: &[Transition], min_threshold: f64) -> Vec<PlotSection<'_>> {
    let mut sections = vec![PlotSection {
        transitions: transitions.iter().collect(),
        name: "",
        title: "All",
    }];

    let categories = [
        (ClashCategory::ConservedToNonexistent, "CN", "CNlow", "Conserved to nonexistent"),
        (ClashCategory::ConservedToTransitory, "CT", "CTlow", "Conserved to transitory"),
        (ClashCategory::TransitoryToNonexistent, "TN", "TNlow", "Transitory to nonexistent"),
    ];
    for (category, name, low_name, title) in categories {
        let (low, high): (Vec<&Transition>, Vec<&Transition>) = transitions
            .iter()
            .filter(|t| t.clash.category == category)
            .partition(|t| t.max_distance() < min_threshold);

        let by_max_distance_desc = |a: &&Transition, b: &&Transition| {
            b.max_distance()
                .partial_cmp(&a.max_distance())
                .unwrap_or(Ordering::Equal)
        };
        let mut high = high;
        let mut low = low;
        high.sort_by(by_max_distance_desc);
        low.sort_by(by_max_distance_desc);

        sections.push(PlotSection {
            transitions: high,
            name,
            title,
        });
        sections.push(PlotSection {
            transitions: low,
            name: low_name,
            title,
        });
    }

    sections.retain(|s| !s.transitions.is_empty());
    sections
}

/// The largest distance reached anywhere, rounded to a multiple of 5 for the
/// plot y-range.
fn rounded_max_distance(transitions: &[Transition]) -> i64 {
    let max = transitions
        .iter()
        .map(Transition::max_distance)
        .fold(f64::NEG_INFINITY, f64::max);
    (5.0 * (max / 5.0).round()) as i64
}

fn data_file_path(prefix: &Path, name: &str) -> PathBuf {
    let mut file_name = prefix
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name.push_str(name);
    prefix.with_file_name(file_name)
}

/// Writes one plot data file: an RMSD header column plus one distance column
/// per transition. Rows whose RMSD repeats across frames collect more than one
/// distance per transition and are dropped to keep the table rectangular.
fn write_data_file(path: &Path, transitions: &[&Transition]) -> io::Result<()> {
    let mut rows: HashMap<u64, Vec<f64>> = HashMap::new();
    for transition in transitions {
        for result in &transition.series {
            rows.entry(result.frame.rmsd.to_bits())
                .or_default()
                .push(result.distance);
        }
    }
    let mut rows: Vec<(f64, Vec<f64>)> = rows
        .into_iter()
        .map(|(bits, distances)| (f64::from_bits(bits), distances))
        .filter(|(_, distances)| distances.len() == transitions.len())
        .collect();
    rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut writer = BufWriter::new(File::create(path)?);
    write!(writer, "RMSD ")?;
    for transition in transitions {
        write!(
            writer,
            "{}/{} ",
            transition.clash.res1, transition.clash.res2
        )?;
    }
    writeln!(writer)?;
    for (rmsd, distances) in rows {
        write!(writer, "{:.3} ", rmsd)?;
        for distance in distances {
            write!(writer, "{:.3} ", distance)?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[allow(clippy::too_many_arguments)]
fn write_script(
    script_path: &Path,
    data_path: &Path,
    section: &PlotSection<'_>,
    chunk_len: usize,
    chunk_index: usize,
    column_offset: usize,
    max_distance: i64,
    frames: &[Frame],
    options: &PlotOptions,
) -> io::Result<()> {
    let mut script = String::new();
    script.push_str(&format!(
        "echo \"\nset term png\nset output 'gnuplot{}_{}.png'\n",
        section.name, chunk_index
    ));
    if section.name.is_empty() {
        script.push_str(&format!(
            "set title '{} collisions'\nset nokey\n",
            section.title
        ));
    } else {
        script.push_str(&format!(
            "set title '{} collisions part {}'\nset key autotitle columnhead outside vertical right top maxcols 1\n",
            section.title,
            chunk_index + 1
        ));
    }
    script.push_str(&format!(
        "set ylabel 'Distance (angstroms)'\nset xlabel 'RMSD (angstroms)'\nset yrange [0:{}]\nset xrange [0:*] reverse\n",
        max_distance
    ));

    // Mark range bounds that fall outside the covered RMSD span.
    if let Some(last) = frames.last() {
        if options.rmsd_min > last.rmsd {
            script.push_str(&format!(
                "set arrow from {min},0 to {min},{max} nohead lc rgb 'black'\n",
                min = options.rmsd_min,
                max = max_distance
            ));
        }
    }
    if let (Some(first), Some(rmsd_max)) = (frames.first(), options.rmsd_max) {
        if rmsd_max < first.rmsd {
            script.push_str(&format!(
                "set arrow from {max},0 to {max},{y} nohead lc rgb 'black'\n",
                max = rmsd_max,
                y = max_distance
            ));
        }
    }

    let columns: Vec<String> = (0..chunk_len)
        .map(|col| {
            if col == 0 {
                format!(
                    "plot '{}' using 1:{} w l",
                    data_path.display(),
                    column_offset + 2
                )
            } else {
                format!(" '' using 1:{} w l", column_offset + col + 2)
            }
        })
        .collect();
    script.push_str(&columns.join(","));
    script.push_str("\n\" | gnuplot -persist\n");

    let mut writer = BufWriter::new(File::create(script_path)?);
    writer.write_all(script.as_bytes())?;
    writer.flush()
}

fn mark_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(path)?.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(path, permissions)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
