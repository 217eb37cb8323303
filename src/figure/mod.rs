
//! Figures are plain descriptions of a chart.  Nothing in here touches a drawing backend; see `render` for that.

pub mod plots;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
	Line,
	Markers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
	pub label:String,
	pub style:SeriesStyle,
	pub points:Vec<(f64, f64)>,
}

impl Series {

	pub fn line(label:&str, points:Vec<(f64, f64)>) -> Self { Self{ label: label.to_string(), style: SeriesStyle::Line, points } }
	pub fn markers(label:&str, points:Vec<(f64, f64)>) -> Self { Self{ label: label.to_string(), style: SeriesStyle::Markers, points } }

	/// Pairs each x value with the y value at the same position.
	pub fn zip(label:&str, style:SeriesStyle, xs:&[f64], ys:&[f64]) -> Self {
		Self{ label: label.to_string(), style, points: xs.iter().cloned().zip(ys.iter().cloned()).collect() }
	}

	pub fn len(&self) -> usize { self.points.len() }
	pub fn is_empty(&self) -> bool { self.points.is_empty() }

}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
	pub name:String,
	pub x_label:String,
	pub y_label:String,
	pub grid:bool,
	pub equal_aspect:bool,
	pub series:Vec<Series>,
}

impl Figure {

	pub fn new(name:&str, x_label:&str, y_label:&str) -> Self {
		Self {
			name: name.to_string(),
			x_label: x_label.to_string(),
			y_label: y_label.to_string(),
			grid: true,
			equal_aspect: false,
			series: vec![],
		}
	}

	pub fn with_series(mut self, s:Series) -> Self {
		self.series.push(s);
		self
	}

	pub fn with_equal_aspect(mut self) -> Self {
		self.equal_aspect = true;
		self
	}

	pub fn series_by_label(&self, label:&str) -> Option<&Series> { self.series.iter().find(|s| s.label == label) }

	/// Axis limits for a plotting area of the given size in pixels.
	pub fn axis_ranges(&self, area_px:(u32, u32)) -> AxisRanges {
		let ranges = AxisRanges::from_points(self.series.iter().flat_map(|s| s.points.iter().cloned())).padded();
		if self.equal_aspect { ranges.with_equal_aspect(area_px) } else { ranges }
	}

}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges {
	pub x:(f64, f64),
	pub y:(f64, f64),
}

const MARGIN_FRACTION:f64 = 0.05;

fn pad_span(lo:f64, hi:f64) -> (f64, f64) {
	let span = hi - lo;
	if span > 0.0 {
		(lo - MARGIN_FRACTION*span, hi + MARGIN_FRACTION*span)
	} else {
		// A constant series still needs a non-empty range
		let half = if lo.abs() > 0.0 { MARGIN_FRACTION*lo.abs() } else { 1.0 };
		(lo - half, hi + half)
	}
}

impl AxisRanges {

	/// Tight limits over all finite points.  Falls back to the unit square when there are none.
	pub fn from_points<I: Iterator<Item=(f64, f64)>>(points:I) -> Self {
		let init = ((f64::INFINITY, f64::NEG_INFINITY), (f64::INFINITY, f64::NEG_INFINITY));
		let (x, y) = points
			.filter(|(x, y)| x.is_finite() && y.is_finite())
			.fold(init, |((x0, x1), (y0, y1)), (x, y)| ((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y))));

		if x.0 > x.1 { Self{ x: (0.0, 1.0), y: (0.0, 1.0) } }
		else { Self{ x, y } }
	}

	pub fn padded(self) -> Self {
		Self{ x: pad_span(self.x.0, self.x.1), y: pad_span(self.y.0, self.y.1) }
	}

	/// Widens the shorter axis about its centre so that one data unit covers the same number of pixels on both axes.
	pub fn with_equal_aspect(self, area_px:(u32, u32)) -> Self {
		let (w, h) = (area_px.0.max(1) as f64, area_px.1.max(1) as f64);
		let units_per_px:f64 = ((self.x.1 - self.x.0) / w).max((self.y.1 - self.y.0) / h);

		let centred = |(lo, hi):(f64, f64), px:f64| {
			let mid = 0.5*(lo + hi);
			let half = 0.5*units_per_px*px;
			(mid - half, mid + half)
		};

		Self{ x: centred(self.x, w), y: centred(self.y, h) }
	}

	pub fn x_span(&self) -> f64 { self.x.1 - self.x.0 }
	pub fn y_span(&self) -> f64 { self.y.1 - self.y.0 }

}
