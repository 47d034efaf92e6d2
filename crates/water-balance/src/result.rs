//! Water-balance output table.

use serde::Serialize;

use crate::balance::{MonthBalance, SoilState};

/// Monthly water-balance series for one site, one entry per month.
///
/// Missing months hold NaN in every derived field.
#[derive(Debug, Clone, Serialize)]
pub struct WaterBalance {
    start_year: i32,
    awc: f64,
    top_capacity: f64,
    initial: SoilState,
    temp: Vec<f64>,
    p: Vec<f64>,
    pe: Vec<f64>,
    pr: Vec<f64>,
    pro: Vec<f64>,
    sp: Vec<f64>,
    pl: Vec<f64>,
    r: Vec<f64>,
    ro: Vec<f64>,
    loss: Vec<f64>,
    et: Vec<f64>,
    ss: Vec<f64>,
    su: Vec<f64>,
}

impl WaterBalance {
    pub(crate) fn with_capacity(
        start_year: i32,
        awc: f64,
        top_capacity: f64,
        initial: SoilState,
        n: usize,
    ) -> Self {
        Self {
            start_year,
            awc,
            top_capacity,
            initial,
            temp: Vec::with_capacity(n),
            p: Vec::with_capacity(n),
            pe: Vec::with_capacity(n),
            pr: Vec::with_capacity(n),
            pro: Vec::with_capacity(n),
            sp: Vec::with_capacity(n),
            pl: Vec::with_capacity(n),
            r: Vec::with_capacity(n),
            ro: Vec::with_capacity(n),
            loss: Vec::with_capacity(n),
            et: Vec::with_capacity(n),
            ss: Vec::with_capacity(n),
            su: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, temp: f64, p: f64, pe: f64, month: &MonthBalance) {
        self.temp.push(temp);
        self.p.push(p);
        self.pe.push(pe);
        self.pr.push(month.pr);
        self.pro.push(month.pro);
        self.sp.push(month.sp);
        self.pl.push(month.pl);
        self.r.push(month.r);
        self.ro.push(month.ro);
        self.loss.push(month.loss);
        self.et.push(month.et);
        self.ss.push(month.end.ss);
        self.su.push(month.end.su);
    }

    pub(crate) fn push_missing(&mut self, temp: f64, p: f64) {
        self.temp.push(temp);
        self.p.push(p);
        for series in [
            &mut self.pe,
            &mut self.pr,
            &mut self.pro,
            &mut self.sp,
            &mut self.pl,
            &mut self.r,
            &mut self.ro,
            &mut self.loss,
            &mut self.et,
            &mut self.ss,
            &mut self.su,
        ] {
            series.push(f64::NAN);
        }
    }

    /// Number of months.
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Returns `true` if there are no months.
    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// Calendar year of the first month.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Underlying-layer capacity used for the run.
    pub fn awc(&self) -> f64 {
        self.awc
    }

    /// Surface-layer capacity used for the run.
    pub fn top_capacity(&self) -> f64 {
        self.top_capacity
    }

    /// Soil state before the first month.
    pub fn initial_state(&self) -> SoilState {
        self.initial
    }

    /// Temperature (°F), echoed from the input.
    pub fn temp(&self) -> &[f64] {
        &self.temp
    }

    /// Precipitation P (inches), echoed from the input.
    pub fn precip(&self) -> &[f64] {
        &self.p
    }

    /// Potential evapotranspiration PE.
    pub fn pe(&self) -> &[f64] {
        &self.pe
    }

    /// Potential recharge PR.
    pub fn pr(&self) -> &[f64] {
        &self.pr
    }

    /// Potential runoff PRO.
    pub fn pro(&self) -> &[f64] {
        &self.pro
    }

    /// Available moisture at the start of each month SP.
    pub fn sp(&self) -> &[f64] {
        &self.sp
    }

    /// Potential loss PL.
    pub fn pl(&self) -> &[f64] {
        &self.pl
    }

    /// Actual recharge R.
    pub fn recharge(&self) -> &[f64] {
        &self.r
    }

    /// Actual runoff RO.
    pub fn runoff(&self) -> &[f64] {
        &self.ro
    }

    /// Actual loss L.
    pub fn loss(&self) -> &[f64] {
        &self.loss
    }

    /// Actual evapotranspiration ET.
    pub fn et(&self) -> &[f64] {
        &self.et
    }

    /// Surface-layer content at the end of each month.
    pub fn ss(&self) -> &[f64] {
        &self.ss
    }

    /// Underlying-layer content at the end of each month.
    pub fn su(&self) -> &[f64] {
        &self.su
    }
}
