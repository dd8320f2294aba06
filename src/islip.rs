//! iSLIP parallel iterative matcher (§4.3).
//!
//! This is the part of the system the spec calls out as the one "worth
//! studying" alongside the event loop: request/grant/accept rounds over
//! rotating pointers, with the pointer-update-on-first-round-accept-only
//! rule that gives iSLIP its desynchronisation/100%-throughput property.
//! There is no equivalent round-robin matcher in the teacher crate to
//! adapt directly (`mvirt-net`'s `Router` is a longest-prefix-match lookup,
//! not a bipartite matcher) — this module is grounded directly on the
//! algorithm as specified in §4.3 and the worked scenarios in §8.

/// Per-tick scratch and persistent pointer state for one switch.
///
/// `grant_ptr`/`accept_ptr` persist across ticks (only first-round accepts
/// advance them); everything else in [`Matching`] is per-tick scratch.
pub struct IslipState {
    num_ports: usize,
    grant_ptr: Vec<usize>,
    accept_ptr: Vec<usize>,
}

/// Result of one scheduling pass: for each input, the output it was
/// matched to (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// `assignment[i] = Some(o)` iff input `i` was matched to output `o`.
    pub assignment: Vec<Option<usize>>,
}

impl Matching {
    fn empty(num_ports: usize) -> Self {
        Self {
            assignment: vec![None; num_ports],
        }
    }

    pub fn is_matched(&self, input: usize) -> bool {
        self.assignment[input].is_some()
    }
}

impl IslipState {
    pub fn new(num_ports: usize) -> Self {
        Self {
            num_ports,
            grant_ptr: vec![0; num_ports],
            accept_ptr: vec![0; num_ports],
        }
    }

    pub fn num_ports(&self) -> usize {
        self.num_ports
    }

    pub fn grant_ptr(&self) -> &[usize] {
        &self.grant_ptr
    }

    pub fn accept_ptr(&self) -> &[usize] {
        &self.accept_ptr
    }

    /// Default round count `K = ceil(log2(N))`, minimum 1 (§4.3, §9).
    pub fn default_rounds(num_ports: usize) -> usize {
        if num_ports <= 1 {
            return 1;
        }
        let mut rounds = 0usize;
        let mut capacity = 1usize;
        while capacity < num_ports {
            capacity <<= 1;
            rounds += 1;
        }
        rounds.max(1)
    }

    /// Run up to `rounds` request/grant/accept iterations over the request
    /// matrix (`requests[i * N + o]` true iff `VOQ[i][o]` is non-empty).
    pub fn schedule(&mut self, requests: &[bool], rounds: usize) -> Matching {
        let n = self.num_ports;
        debug_assert_eq!(requests.len(), n * n);

        let mut matching = Matching::empty(n);
        let mut input_matched = vec![false; n];
        let mut output_matched = vec![false; n];

        for round in 0..rounds.max(1) {
            let is_first_round = round == 0;

            // Grant phase: each unmatched output tentatively grants to the
            // first unmatched requesting input, scanning from grant_ptr[o].
            let mut grants: Vec<Option<usize>> = vec![None; n];
            for o in 0..n {
                if output_matched[o] {
                    continue;
                }
                let start = self.grant_ptr[o];
                for step in 0..n {
                    let i = (start + step) % n;
                    if input_matched[i] {
                        continue;
                    }
                    if requests[i * n + o] {
                        grants[o] = Some(i);
                        break;
                    }
                }
            }

            // Accept phase: each unmatched input that received a grant
            // accepts the first granting output, scanning from
            // accept_ptr[i].
            let mut any_accept = false;
            for i in 0..n {
                if input_matched[i] {
                    continue;
                }
                let start = self.accept_ptr[i];
                let mut accepted: Option<usize> = None;
                for step in 0..n {
                    let o = (start + step) % n;
                    if grants[o] == Some(i) {
                        accepted = Some(o);
                        break;
                    }
                }

                if let Some(o) = accepted {
                    input_matched[i] = true;
                    output_matched[o] = true;
                    matching.assignment[i] = Some(o);
                    any_accept = true;

                    // Pointer update rule: only first-round accepts
                    // desynchronise the pointers (§4.3).
                    if is_first_round {
                        self.grant_ptr[o] = (i + 1) % n;
                        self.accept_ptr[i] = (o + 1) % n;
                    }
                }
            }

            if !any_accept || input_matched.iter().all(|&m| m) || output_matched.iter().all(|&m| m) {
                break;
            }
        }

        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests(n: usize, pairs: &[(usize, usize)]) -> Vec<bool> {
        let mut r = vec![false; n * n];
        for &(i, o) in pairs {
            r[i * n + o] = true;
        }
        r
    }

    #[test]
    fn default_rounds_is_ceil_log2() {
        assert_eq!(IslipState::default_rounds(1), 1);
        assert_eq!(IslipState::default_rounds(2), 1);
        assert_eq!(IslipState::default_rounds(3), 2);
        assert_eq!(IslipState::default_rounds(4), 2);
        assert_eq!(IslipState::default_rounds(5), 3);
        assert_eq!(IslipState::default_rounds(16), 4);
    }

    /// Scenario 1 (§8): two ports, single demand.
    #[test]
    fn scenario_single_demand() {
        let mut state = IslipState::new(2);
        let r = requests(2, &[(0, 0)]);
        let m = state.schedule(&r, 1);
        assert_eq!(m.assignment, vec![Some(0), None]);
        assert_eq!(state.grant_ptr(), &[1, 0]);
        assert_eq!(state.accept_ptr(), &[1, 0]);
    }

    /// Scenario 2 (§8): contention resolved over two rounds, only the
    /// round-1 pointer update takes effect.
    #[test]
    fn scenario_contention_and_desync() {
        let mut state = IslipState::new(2);
        let r = requests(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let m = state.schedule(&r, 2);
        assert_eq!(m.assignment, vec![Some(0), Some(1)]);
        assert_eq!(state.grant_ptr(), &[1, 0]);
        assert_eq!(state.accept_ptr(), &[1, 0]);
    }

    #[test]
    fn matching_is_one_to_one() {
        let mut state = IslipState::new(4);
        let r = requests(
            4,
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (3, 2), (3, 3)],
        );
        let m = state.schedule(&r, IslipState::default_rounds(4));

        let mut used_outputs = std::collections::HashSet::new();
        for assigned in m.assignment.iter().flatten() {
            assert!(used_outputs.insert(*assigned), "output matched twice");
        }
    }

    #[test]
    fn non_empty_requests_yield_at_least_one_match() {
        let mut state = IslipState::new(4);
        let r = requests(4, &[(2, 3)]);
        let m = state.schedule(&r, IslipState::default_rounds(4));
        assert!(m.assignment.iter().any(|a| a.is_some()));
    }

    #[test]
    fn pointers_only_advance_on_first_round_accepts() {
        let mut state = IslipState::new(3);
        // Round 1: input 0 matches output 0 immediately (pointer update).
        // Inputs 1, 2 contend for output 1 in round >= 2 (no update).
        let r = requests(3, &[(0, 0), (1, 1), (2, 1)]);
        let before_grant = state.grant_ptr().to_vec();
        let before_accept = state.accept_ptr().to_vec();
        let m = state.schedule(&r, 3);

        assert!(m.is_matched(0));
        // grant_ptr[0]/accept_ptr[0] updated from the round-1 match at (0,0).
        assert_eq!(state.grant_ptr()[0], (0 + 1) % 3);
        assert_eq!(state.accept_ptr()[0], (0 + 1) % 3);
        // Untouched outputs/inputs keep their initial pointers.
        assert_eq!(state.grant_ptr()[2], before_grant[2]);
        assert_eq!(state.accept_ptr()[2], before_accept[2]);
    }

    #[test]
    fn empty_requests_produce_no_matches() {
        let mut state = IslipState::new(4);
        let r = vec![false; 16];
        let m = state.schedule(&r, IslipState::default_rounds(4));
        assert!(m.assignment.iter().all(|a| a.is_none()));
    }
}
