pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Progress Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&display=swap');

    :root {
      --bg: #f7f8fa;
      --ink: #1f2933;
      --muted: #6b7280;
      --accent: #346ff3;
      --target: #9ca3af;
      --card: #ffffff;
      --line: #e5e7eb;
      --good: #2d7a4b;
      --bad: #c63b2b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: 'Inter', 'Helvetica Neue', sans-serif;
      display: flex;
      justify-content: center;
      padding: 32px 16px 56px;
    }

    .page {
      width: min(820px, 100%);
      display: grid;
      gap: 20px;
    }

    .topbar {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
      font-weight: 600;
    }

    .updated {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .refresh {
      appearance: none;
      border: 1px solid var(--line);
      background: var(--card);
      color: var(--ink);
      border-radius: 8px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 500;
      cursor: pointer;
    }

    .refresh:hover {
      border-color: var(--accent);
      color: var(--accent);
    }

    .quote {
      background: var(--card);
      border: 1px solid var(--line);
      border-left: 3px solid var(--accent);
      border-radius: 10px;
      padding: 14px 18px;
      color: var(--muted);
      font-style: italic;
      min-height: 1.4em;
    }

    .tabs {
      display: inline-flex;
      gap: 4px;
      padding: 4px;
      background: var(--line);
      border-radius: 10px;
      width: fit-content;
    }

    .tab {
      border: none;
      background: transparent;
      border-radius: 8px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 500;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: var(--card);
      color: var(--accent);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 18px;
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    .legend {
      display: flex;
      gap: 18px;
      font-size: 0.85rem;
      color: var(--muted);
      margin-bottom: 10px;
    }

    .legend .swatch {
      display: inline-block;
      width: 18px;
      height: 3px;
      vertical-align: middle;
      margin-right: 6px;
      background: var(--accent);
    }

    .legend .swatch.target-swatch {
      background: var(--target);
    }

    .axis-label {
      fill: var(--muted);
      font-size: 11px;
      font-family: 'Inter', sans-serif;
    }

    .grid-line {
      stroke: var(--line);
    }

    .actual-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2.5;
    }

    .target-line {
      fill: none;
      stroke: var(--target);
      stroke-width: 2;
      stroke-dasharray: 6 5;
    }

    .range {
      display: grid;
      gap: 8px;
    }

    .range-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .range-row label {
      font-size: 0.8rem;
      color: var(--muted);
      width: 40px;
    }

    .range-row input[type='range'] {
      flex: 1;
      accent-color: var(--accent);
    }

    .range-row output {
      font-size: 0.85rem;
      width: 92px;
      text-align: right;
      font-variant-numeric: tabular-nums;
    }

    .callouts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .callout .label {
      display: block;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .callout .value {
      display: block;
      margin-top: 6px;
      font-size: 1.5rem;
      font-weight: 600;
    }

    .callout .value.ahead {
      color: var(--good);
    }

    .callout .value.behind {
      color: var(--bad);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type='error'] {
      color: var(--bad);
    }
  </style>
</head>
<body>
  <main class="page">
    <div class="topbar">
      <h1>Progress Dashboard</h1>
      <div>
        <span class="updated" id="updated"></span>
        <button class="refresh" id="refresh" type="button">Refresh</button>
      </div>
    </div>

    <div class="quote" id="quote"></div>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-view="daily" role="tab" aria-selected="true">Daily</button>
      <button class="tab" type="button" data-view="cumulative" role="tab" aria-selected="false">Cumulative</button>
    </div>

    <section class="card">
      <div class="legend">
        <span><span class="swatch"></span>Actual</span>
        <span><span class="swatch target-swatch"></span>Target</span>
      </div>
      <svg id="chart" viewBox="0 0 760 300" role="img" aria-label="Progress chart"></svg>
      <div class="range">
        <div class="range-row">
          <label for="range-start">From</label>
          <input type="range" id="range-start" min="0" max="0" value="0" />
          <output id="start-date"></output>
        </div>
        <div class="range-row">
          <label for="range-end">To</label>
          <input type="range" id="range-end" min="0" max="0" value="0" />
          <output id="end-date"></output>
        </div>
      </div>
    </section>

    <section class="callouts">
      <div class="card callout">
        <span class="label">Latest actual</span>
        <span class="value" id="latest-actual">--</span>
      </div>
      <div class="card callout">
        <span class="label">Latest target</span>
        <span class="value" id="latest-target">--</span>
      </div>
      <div class="card callout">
        <span class="label">Gap</span>
        <span class="value" id="gap">--</span>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const quoteEl = document.getElementById('quote');
    const updatedEl = document.getElementById('updated');
    const statusEl = document.getElementById('status');
    const startInput = document.getElementById('range-start');
    const endInput = document.getElementById('range-end');
    const startDateEl = document.getElementById('start-date');
    const endDateEl = document.getElementById('end-date');
    const latestActualEl = document.getElementById('latest-actual');
    const latestTargetEl = document.getElementById('latest-target');
    const gapEl = document.getElementById('gap');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let data = null;
    let view = 'daily';
    let range = [0, 0];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const activeSeries = () => (view === 'cumulative' ? data.cumulative : data.daily);

    const sliceSeries = (series, start, end) => ({
      labels: series.labels.slice(start, end + 1),
      actual: series.actual.slice(start, end + 1),
      target: series.target.slice(start, end + 1)
    });

    const formatNumber = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderChart = (series) => {
      if (!series.labels.length) {
        chartEl.innerHTML = '<text class="axis-label" x="50%" y="50%" text-anchor="middle">No data in range</text>';
        return;
      }

      const width = 760;
      const height = 300;
      const left = 48;
      const right = 16;
      const top = 18;
      const bottom = 36;

      const values = series.actual.concat(series.target);
      let min = Math.min(0, ...values);
      let max = Math.max(...values);
      if (min === max) {
        max = min + 1;
      }
      const span = max - min;

      const count = series.labels.length;
      const step = count > 1 ? (width - left - right) / (count - 1) : 0;
      const xFor = (index) => left + index * step;
      const yFor = (value) => height - bottom - ((value - min) / span) * (height - top - bottom);

      const pathFor = (points) =>
        points.map((value, index) => (index === 0 ? 'M' : 'L') + ' ' + xFor(index).toFixed(1) + ' ' + yFor(value).toFixed(1)).join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (span * i) / ticks;
        const y = yFor(value);
        grid += '<line class="grid-line" x1="' + left + '" y1="' + y + '" x2="' + (width - right) + '" y2="' + y + '" />';
        grid += '<text class="axis-label" x="' + (left - 8) + '" y="' + (y + 4) + '" text-anchor="end">' + formatNumber(value) + '</text>';
      }

      const every = Math.max(1, Math.ceil(count / 10));
      let xLabels = '';
      series.labels.forEach((label, index) => {
        if (index % every !== 0 && index !== count - 1) {
          return;
        }
        xLabels += '<text class="axis-label" x="' + xFor(index) + '" y="' + (height - bottom + 20) + '" text-anchor="middle">' + label.slice(5) + '</text>';
      });

      chartEl.innerHTML =
        grid +
        '<path class="target-line" d="' + pathFor(series.target) + '" />' +
        '<path class="actual-line" d="' + pathFor(series.actual) + '" />' +
        xLabels;
    };

    const renderCallouts = (series) => {
      if (!series.labels.length) {
        latestActualEl.textContent = '--';
        latestTargetEl.textContent = '--';
        gapEl.textContent = '--';
        gapEl.className = 'value';
        return;
      }
      const last = series.labels.length - 1;
      const actual = series.actual[last];
      const target = series.target[last];
      const gap = actual - target;
      latestActualEl.textContent = formatNumber(actual);
      latestTargetEl.textContent = formatNumber(target);
      gapEl.textContent = (gap >= 0 ? '+' : '') + formatNumber(gap);
      gapEl.className = 'value ' + (gap >= 0 ? 'ahead' : 'behind');
    };

    const render = () => {
      if (!data) {
        return;
      }
      const series = activeSeries();
      const last = Math.max(0, series.labels.length - 1);
      const start = Math.min(range[0], last);
      const end = Math.min(range[1], last);
      startDateEl.textContent = series.labels[start] || '';
      endDateEl.textContent = series.labels[end] || '';
      const windowed = sliceSeries(series, start, end);
      renderChart(windowed);
      renderCallouts(windowed);
    };

    const syncSliders = () => {
      const last = Math.max(0, activeSeries().labels.length - 1);
      startInput.max = last;
      endInput.max = last;
      startInput.value = range[0];
      endInput.value = range[1];
    };

    const onRangeInput = () => {
      let start = Number(startInput.value);
      let end = Number(endInput.value);
      if (start > end) {
        start = end;
        startInput.value = start;
      }
      range = [start, end];
      render();
    };

    const loadQuote = async () => {
      const res = await fetch('/api/quote');
      if (!res.ok) {
        return;
      }
      const body = await res.json();
      quoteEl.textContent = body.quote;
    };

    const loadProgress = async () => {
      const res = await fetch('/api/progress');
      if (!res.ok) {
        const body = await res.json().catch(() => ({}));
        throw new Error(body.error || 'request failed');
      }
      data = await res.json();
      // Range policy is applied once per refresh, from the server stamp.
      range = [data.window.start, data.window.end];
      syncSliders();
      render();
      updatedEl.textContent = 'Updated ' + new Date().toLocaleTimeString();
    };

    const refresh = async () => {
      setStatus('Loading...', '');
      try {
        await Promise.all([loadProgress(), loadQuote()]);
        setStatus('', '');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        view = button.dataset.view;
        tabs.forEach((tab) => {
          const active = tab === button;
          tab.classList.toggle('active', active);
          tab.setAttribute('aria-selected', String(active));
        });
        syncSliders();
        render();
      });
    });

    startInput.addEventListener('input', onRangeInput);
    endInput.addEventListener('input', onRangeInput);
    document.getElementById('refresh').addEventListener('click', refresh);

    refresh();
  </script>
</body>
</html>
"#;
