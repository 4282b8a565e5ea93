/*!
# Introductory Tutorial for Tinycat BASIC

Begin by opening a terminal and running the executable. You get a
`>` prompt. Type `BYE` or CTRL-D to exit. Stop a running program
with CTRL-C.

<pre><code>&nbsp;> █
</code></pre>

Let's tell the computer to print something. Type in the marked line
followed by ENTER.

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

Entering a statement which executes immediately is called direct mode.
To make more interesting programs, we'll put statements into a program
by giving them a line number.

<pre><code>&nbsp;> 10 print "Hello World"
</code></pre>

Nothing happens. The statement is saved to be executed later.
Let's try a couple new commands.

<pre><code>&nbsp;> list
&nbsp;  10 print "Hello World"
&nbsp;> run
&nbsp;  Hello World
</code></pre>

Typing a line with the same number replaces it. Lines run in order
of their numbers no matter in which order they were typed.

<pre><code>&nbsp;> 20 goto 10
&nbsp;> 5 let n = 0
&nbsp;> 10 let n = n + 1
&nbsp;> 15 if n > 3 then end
&nbsp;> 17 print n
&nbsp;> run
&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

When something goes wrong, the error tells you where.

<pre><code>&nbsp;> 30 print m
&nbsp;> 15 if n > 3 then goto 30
&nbsp;> run
&nbsp;  1
&nbsp;  2
&nbsp;  3
&nbsp;  ?Variable not found: m in line 30, column 7
</code></pre>

Save your work with `save "count.bas"` and get it back later with
`load "count.bas"`. A file can also be run straight from the shell
with `tinycat count.bas --run`.
*/
