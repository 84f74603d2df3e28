//! D3 force-layout HTML serializer.
//!
//! Produces a self-contained HTML document with the node and link records
//! embedded as JSON. The page loads d3 v7 and runs a force simulation in the
//! browser; this serializer's responsibility ends at valid, escaped embedded
//! data inside a syntactically valid shell.

use crate::options::ExportOptions;
use crate::policy::ResolvedNode;
use graphport_graph::PropertyGraph;
use serde::Serialize;

/// A node record in the embedded data block.
#[derive(Debug, Serialize)]
struct D3Node {
    /// String form of the node id
    id: String,

    /// Resolved display label
    label: String,

    /// Fill color, present when `color_by_label` is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

/// A link record in the embedded data block.
#[derive(Debug, Serialize)]
struct D3Link {
    /// Source node id
    source: String,

    /// Target node id
    target: String,

    /// Relationship type
    #[serde(rename = "type")]
    relationship: String,
}

#[derive(Debug, Serialize)]
struct D3Data {
    nodes: Vec<D3Node>,
    links: Vec<D3Link>,
}

/// Serialize a graph to a standalone D3 HTML document.
pub fn serialize(
    graph: &PropertyGraph,
    nodes: &[ResolvedNode<'_>],
    _options: &ExportOptions,
) -> String {
    let data = D3Data {
        nodes: nodes
            .iter()
            .map(|resolved| D3Node {
                id: resolved.node.id.to_display(),
                label: resolved.display.clone(),
                color: resolved.color.map(str::to_string),
            })
            .collect(),
        links: graph
            .edges()
            .map(|edge| D3Link {
                source: edge.source.to_display(),
                target: edge.target.to_display(),
                relationship: edge.relationship.clone(),
            })
            .collect(),
    };

    let blob = serde_json::to_string(&data)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize: {}\"}}", e));
    // A `</script>` inside a label would end the script element early;
    // `<\/` is the same text to the JSON parser.
    let blob = blob.replace("</", "<\\/");

    TEMPLATE.replace("__GRAPH_DATA__", &blob)
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Graph</title>
<style>
  body { margin: 0; font: 12px sans-serif; }
  svg { width: 100vw; height: 100vh; }
  .link { stroke: #999; stroke-opacity: 0.6; }
  .link-label { fill: #555; font-size: 10px; }
  .node circle { stroke: #fff; stroke-width: 1.5px; }
  .node text { pointer-events: none; }
</style>
</head>
<body>
<svg></svg>
<script src="https://d3js.org/d3.v7.min.js"></script>
<script>
const graph = __GRAPH_DATA__;

const svg = d3.select("svg");
const width = window.innerWidth;
const height = window.innerHeight;

const simulation = d3.forceSimulation(graph.nodes)
    .force("link", d3.forceLink(graph.links).id(d => d.id).distance(120))
    .force("charge", d3.forceManyBody().strength(-300))
    .force("center", d3.forceCenter(width / 2, height / 2));

const link = svg.append("g")
  .selectAll("line")
  .data(graph.links)
  .join("line")
    .attr("class", "link");

const linkLabel = svg.append("g")
  .selectAll("text")
  .data(graph.links)
  .join("text")
    .attr("class", "link-label")
    .text(d => d.type);

const node = svg.append("g")
  .selectAll("g")
  .data(graph.nodes)
  .join("g")
    .attr("class", "node")
    .call(d3.drag()
        .on("start", (event, d) => {
          if (!event.active) simulation.alphaTarget(0.3).restart();
          d.fx = d.x;
          d.fy = d.y;
        })
        .on("drag", (event, d) => {
          d.fx = event.x;
          d.fy = event.y;
        })
        .on("end", (event, d) => {
          if (!event.active) simulation.alphaTarget(0);
          d.fx = null;
          d.fy = null;
        }));

node.append("circle")
    .attr("r", 8)
    .attr("fill", d => d.color || "#69b3a2");

node.append("text")
    .attr("dx", 12)
    .attr("dy", 4)
    .text(d => d.label);

simulation.on("tick", () => {
  link
      .attr("x1", d => d.source.x)
      .attr("y1", d => d.source.y)
      .attr("x2", d => d.target.x)
      .attr("y2", d => d.target.y);
  linkLabel
      .attr("x", d => (d.source.x + d.target.x) / 2)
      .attr("y", d => (d.source.y + d.target.y) / 2);
  node.attr("transform", d => `translate(${d.x},${d.y})`);
});
</script>
</body>
</html>
"##;
