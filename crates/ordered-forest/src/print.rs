//! Box-drawing debug printer.

use crate::types::BinaryNode;

/// Renders one child branch given the indentation it must use.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Types that render themselves as an indented tree.
pub trait Printable {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;
}

/// Renders `children` as branches under the current line.
///
/// `None` entries are skipped; a trailing run of `None` does not count when
/// deciding which branch is drawn last.
pub fn print_tree(tab: Option<&str>, children: &[Option<&PrintChild<'_>>]) -> String {
    let tab = tab.unwrap_or("");
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Renders the subtree at `node`, labelling each node with `label` and
/// marking children with `←` / `→`.
pub fn print_node<N, F>(arena: &[N], node: u32, tab: &str, label: &F) -> String
where
    N: BinaryNode,
    F: Fn(u32, &N) -> String,
{
    let n = &arena[node as usize];
    let l = n.l();
    let r = n.r();
    let left = |t: &str| {
        l.map_or_else(String::new, |l| format!("← {}", print_node(arena, l, t, label)))
    };
    let right = |t: &str| {
        r.map_or_else(String::new, |r| format!("→ {}", print_node(arena, r, t, label)))
    };
    let mut out = label(node, n);
    out.push_str(&print_tree(
        Some(tab),
        &[
            l.map(|_| &left as &PrintChild<'_>),
            r.map(|_| &right as &PrintChild<'_>),
        ],
    ));
    out
}
